use std::sync::Mutex;

/// Runs closures one at a time across every thread sharing the executor.
#[derive(Debug, Default)]
pub struct SerialExecutor {
    lock: Mutex<()>,
}

impl SerialExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `work` while holding the executor lock.
    ///
    /// A panic in an earlier job poisons the lock; the poison is cleared
    /// here since the guarded state is `()`.
    pub fn run<T, F>(&self, work: F) -> T
    where
        F: FnOnce() -> T,
    {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| {
            self.lock.clear_poison();
            poisoned.into_inner()
        });
        work()
    }
}
