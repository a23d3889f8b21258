use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Periodic background job, cancelled with [`RefreshTask::stop`] or on drop.
///
/// The job runs once immediately and then once per interval on a dedicated
/// thread. It owns nothing but its closure.
#[derive(Debug)]
pub struct RefreshTask {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTask {
    pub fn spawn<F>(interval: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || {
            loop {
                tick();
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            tracing::debug!("Refresh task stopped");
        });
        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    /// Stop ticking and wait for an in-progress tick to finish.
    ///
    /// Returns `true` only for the call that actually stopped the task.
    pub fn stop(&mut self) -> bool {
        let Some(stop_tx) = self.stop_tx.take() else {
            return false;
        };
        // A send error means the thread already exited.
        let _ = stop_tx.send(());
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::warn!("Refresh task panicked");
        }
        true
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "refresh_tests.rs"]
mod tests;
