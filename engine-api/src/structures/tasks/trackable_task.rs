use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Condvar, Mutex};

/// A cancellable, progress-reporting handle for a long-running background operation (a scan, a
/// value-collection pass). The scan driver owns one per invocation; callers poll `get_progress`
/// or block on `wait_for_completion`, and request cancellation through the shared token.
pub struct TrackableTask {
    name: String,
    cancellation_token: Arc<AtomicBool>,
    progress_percent_bits: AtomicU32,
    completed: Mutex<bool>,
    completed_condvar: Condvar,
}

impl TrackableTask {
    /// Creates a new task. `shared_cancellation_token` lets a caller hand in an existing token
    /// (e.g. a parent task's) instead of minting a fresh one, so cancelling the parent cancels
    /// every child sharing the token.
    pub fn create(
        name: String,
        shared_cancellation_token: Option<Arc<AtomicBool>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            name,
            cancellation_token: shared_cancellation_token.unwrap_or_else(|| Arc::new(AtomicBool::new(false))),
            progress_percent_bits: AtomicU32::new(0.0f32.to_bits()),
            completed: Mutex::new(false),
            completed_condvar: Condvar::new(),
        })
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_cancellation_token(&self) -> &Arc<AtomicBool> {
        &self.cancellation_token
    }

    pub fn cancel(&self) {
        self.cancellation_token.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation_token.load(Ordering::SeqCst)
    }

    pub fn set_progress(
        &self,
        progress_percent: f32,
    ) {
        self.progress_percent_bits.store(progress_percent.to_bits(), Ordering::SeqCst);
    }

    pub fn get_progress(&self) -> f32 {
        f32::from_bits(self.progress_percent_bits.load(Ordering::SeqCst))
    }

    pub fn complete(&self) {
        self.set_progress(100.0);
        let mut completed = self.completed.lock().unwrap();
        *completed = true;
        self.completed_condvar.notify_all();
    }

    pub fn is_completed(&self) -> bool {
        *self.completed.lock().unwrap()
    }

    pub fn wait_for_completion(&self) {
        let mut completed = self.completed.lock().unwrap();
        while !*completed {
            completed = self.completed_condvar.wait(completed).unwrap();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn wait_for_completion_blocks_until_complete_is_called() {
        let task = TrackableTask::create("test".to_string(), None);
        let task_clone = task.clone();

        thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            task_clone.complete();
        });

        task.wait_for_completion();
        assert!(task.is_completed());
        assert_eq!(task.get_progress(), 100.0);
    }

    #[test]
    fn cancellation_token_is_observable_by_clones() {
        let task = TrackableTask::create("test".to_string(), None);
        let token = task.get_cancellation_token().clone();

        assert!(!token.load(Ordering::SeqCst));
        task.cancel();
        assert!(token.load(Ordering::SeqCst));
    }

    #[test]
    fn shared_cancellation_token_links_parent_and_child() {
        let parent = TrackableTask::create("parent".to_string(), None);
        let child = TrackableTask::create("child".to_string(), Some(parent.get_cancellation_token().clone()));

        parent.cancel();
        assert!(child.is_cancelled());
    }
}
