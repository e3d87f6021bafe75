// SPDX-License-Identifier: GPL-3.0-only

//! Toastkit demo
//!
//! Drives the toast runtime against an in-memory host and logs what happens:
//! a toast hiding itself, a toast replaced by a newer one, and a toast
//! dismissed early with a swipe. Run with `RUST_LOG=toastkit=debug` to see
//! every lifecycle step.

use std::time::Duration;

use toastkit::config::{Config, ToastSettings};
use toastkit::host::MemoryHost;
use toastkit::navigation::Screen;
use toastkit::surface::SurfaceId;
use toastkit::toast::{SwipeTracker, ToastIcon, ToastRequest, ToastRuntime};

const ROOT: SurfaceId = SurfaceId(1);
const DETAIL: SurfaceId = SurfaceId(3);

/// How long the demo waits without any toast activity before moving on.
const QUIET: Duration = Duration::from_millis(2500);

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("toastkit=info".parse().unwrap()),
        )
        .init();

    let config = Config::load();
    let settings = ToastSettings::from(&config);
    tracing::info!(
        "Toast settings: default {:?}, minimum {:?}, dismiss by {:?}",
        settings.default_duration,
        settings.min_duration,
        settings.dismiss_trigger
    );

    // A root stack with a detail screen pushed on top.
    let navigation = Screen::stack(
        ROOT,
        vec![Screen::content(SurfaceId(2)), Screen::content(DETAIL)],
    );
    let host = MemoryHost::with_navigation(navigation);
    let (mut runtime, handle) = ToastRuntime::new(host, settings);

    tracing::info!("Showing a toast that hides itself");
    handle.show_toast("Saved", Some(ToastIcon::named("document-save-symbolic")), None);
    runtime.settle(QUIET).await;
    log_surface(&runtime, "after auto-hide");

    tracing::info!("Showing a toast and replacing it 100ms later");
    handle.show_toast("Uploading…", None, Some(Duration::from_secs(5)));
    runtime.step().await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.show_toast("Uploaded", Some(ToastIcon::named("emblem-ok-symbolic")), None);
    runtime.step().await;
    log_surface(&runtime, "after supersede");
    runtime.settle(QUIET).await;

    tracing::info!("Showing a toast and swiping it away after 500ms");
    handle.show(ToastRequest::new("Swipe me").with_duration_secs(2.0));
    runtime.step().await;
    tokio::time::sleep(Duration::from_millis(500)).await;

    let widget = runtime
        .controller()
        .registry()
        .get(DETAIL)
        .map(|entry| entry.widget());
    if let Some(widget) = widget {
        // Pointer samples as a host would deliver them.
        let mut tracker = SwipeTracker::new();
        tracker.press(10.0);
        let swipe = [14.0, 22.0, 40.0]
            .into_iter()
            .find_map(|y| tracker.moved(y))
            .or_else(|| tracker.release(40.0));
        if let Some(swipe) = swipe {
            handle.send(swipe.into_message(widget));
        }
    }
    runtime.settle(QUIET).await;
    log_surface(&runtime, "after swipe");

    handle.shutdown();
    let host = runtime.run().await;
    tracing::info!("Done, {} toast(s) left on {}", host.toast_count(DETAIL), DETAIL);
}

fn log_surface(runtime: &ToastRuntime<MemoryHost>, when: &str) {
    let controller = runtime.controller();
    tracing::info!(
        "{} {}: {:?}, toasts {:?}",
        DETAIL,
        when,
        controller.phase(DETAIL),
        controller.host().titles_on(DETAIL)
    );
}
