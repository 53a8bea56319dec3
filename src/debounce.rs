// Debounced callback scheduling
//
// A Debouncer owns at most one scheduled call. Every call() aborts the pending
// task (if any) and schedules a fresh one carrying the newest value, so a burst
// of calls collapses into the last one once the input goes quiet.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Collapses rapid successive calls into a single delayed callback
///
/// The callback runs on the tokio runtime after `delay` has elapsed without
/// another `call()`. Nothing is returned to the caller (fire-and-forget).
pub struct Debouncer<T> {
    delay: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    /// Cancel any scheduled call and schedule a new one with `value`
    pub fn call(&mut self, value: T) {
        self.cancel();

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(value);
        }));
    }

    /// Drop the scheduled call, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a call is scheduled and has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(String) + Send + Sync + 'static) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&fired);
        (fired, move |value: String| sink.lock().unwrap().push(value))
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_call_fires_after_delay() {
        let (fired, callback) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300), callback);

        debouncer.call("react".to_string());
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(fired.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(*fired.lock().unwrap(), vec!["react".to_string()]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_value() {
        let (fired, callback) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300), callback);

        debouncer.call("r".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.call("re".to_string());
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.call("rea".to_string());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(*fired.lock().unwrap(), vec!["rea".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_in_separate_windows_each_fire() {
        let (fired, callback) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(400), callback);

        debouncer.call("vue".to_string());
        tokio::time::sleep(Duration::from_millis(500)).await;
        debouncer.call("svelte".to_string());
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(
            *fired.lock().unwrap(),
            vec!["vue".to_string(), "svelte".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_call() {
        let (fired, callback) = recorder();
        let mut debouncer = Debouncer::new(Duration::from_millis(300), callback);

        debouncer.call("tokio".to_string());
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(fired.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_call() {
        let (fired, callback) = recorder();
        {
            let mut debouncer = Debouncer::new(Duration::from_millis(300), callback);
            debouncer.call("serde".to_string());
        }

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(fired.lock().unwrap().is_empty());
    }
}
