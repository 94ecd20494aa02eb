//! # Example: toasts
//!
//! Drives a toaster the way an application and its rendering surface would.
//!
//! Shows how to:
//! - Wire the built-in [`LogWriter`] subscriber.
//! - Render the list through a synchronous listener.
//! - Let [`AutoDismiss`] own the timers.
//! - Track an async operation with [`Toaster::promise`].
//!
//! ## Flow
//! ```text
//! success("Saved") ──► visible ──(4s)──► TimerExpired ──► dismissed
//! show({id: "net", sticky}) ──► visible until dismiss(Some("net"))
//! promise(upload, msgs) ──► Loading (sticky) ──► Success, same id ──(4s)──► dismissed
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example toasts --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use toastvisor::{
    AutoDismiss, LogWriter, PromiseMessages, ToastAction, ToastId, ToastRecord, ToastRequest,
    Toaster, ToasterConfig,
};

fn render(list: &[ToastRecord]) {
    let line: Vec<String> = list
        .iter()
        .map(|t| format!("{}:{:?}", t.kind, t.title))
        .collect();
    println!("[screen] {}", line.join(" | "));
}

async fn upload(files: u32) -> Result<u32, std::io::Error> {
    tokio::time::sleep(Duration::from_millis(800)).await;
    Ok(files)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cfg = ToasterConfig {
        max_visible: 3,
        default_duration: Duration::from_secs(2),
        ..ToasterConfig::default()
    };
    let toaster = Toaster::builder(cfg)
        .with_subscribers(vec![Arc::new(LogWriter)])
        .build();

    let _timers = AutoDismiss::attach(&toaster);
    toaster.subscribe(render);

    toaster.success("Saved");
    toaster.show(
        ToastRequest::from("Offline")
            .with_id("net")
            .with_description("Changes are kept locally")
            .with_action(ToastAction::new("Retry", || println!("[action] retry")))
            .sticky(),
    );

    let uploaded = toaster
        .promise(
            upload(3),
            PromiseMessages::new("Uploading...")
                .success_with(|n: &u32| format!("Uploaded {n} files"))
                .error_with(|e: &std::io::Error| format!("Upload failed: {e}")),
        )
        .await;
    println!("[main] upload result: {uploaded:?}");

    tokio::time::sleep(Duration::from_secs(3)).await;
    toaster.dismiss(Some(&ToastId::from("net")));

    toaster.shutdown().await;
}
