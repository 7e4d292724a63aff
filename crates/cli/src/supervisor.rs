//! Fail-fast process supervision.
//!
//! Any panic, on any thread, terminates the process with status 1. The
//! server runs as its own task; if it stops with an error or panics, the
//! process exits 1 instead of limping on.

use std::future::Future;

use anyhow::Result;

/// Log the panic through tracing, then exit 1.
pub(crate) fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(panic = %info, "panic, shutting down");
        default_hook(info);
        std::process::exit(1);
    }));
}

/// Run `task` to completion on its own tokio task.
///
/// `Ok` returns normally. An error or a panic is logged and ends the
/// process with status 1.
pub(crate) async fn supervise<F>(name: &'static str, task: F)
where
    F: Future<Output = Result<()>> + Send + 'static,
{
    match tokio::spawn(task).await {
        Ok(Ok(())) => tracing::info!(task = name, "stopped"),
        Ok(Err(e)) => {
            tracing::error!(task = name, error = %format!("{e:#}"), "task failed, exiting");
            std::process::exit(1);
        },
        Err(join_err) => {
            tracing::error!(task = name, error = %join_err, "task panicked, exiting");
            std::process::exit(1);
        },
    }
}
