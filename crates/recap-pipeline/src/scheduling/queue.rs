//! Single-worker FIFO job queue.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use tracing::{error, info, info_span};
use uuid::Uuid;

use recap_core::errors::{RecapError, RecapResult};

type Job = Box<dyn FnOnce() + Send + 'static>;

struct Envelope {
    id: Uuid,
    job: Job,
}

/// Runs submitted jobs one at a time, in submission order, on one
/// dedicated thread.
///
/// Dropping the queue stops accepting work, lets queued jobs finish, and
/// joins the worker.
pub struct JobQueue {
    sender: Option<Sender<Envelope>>,
    worker: Option<JoinHandle<()>>,
}

/// Receives one job's result.
pub struct JobHandle<T> {
    id: Uuid,
    receiver: Receiver<T>,
}

impl<T> JobHandle<T> {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Block until the job finishes.
    ///
    /// Fails with [`RecapError::JobAborted`] if the job panicked.
    pub fn wait(self) -> RecapResult<T> {
        self.receiver.recv().map_err(|_| RecapError::JobAborted {
            reason: format!("job {} ended without a result", self.id),
        })
    }
}

impl JobQueue {
    pub fn start() -> RecapResult<Self> {
        let (sender, receiver) = mpsc::channel::<Envelope>();
        let worker = thread::Builder::new()
            .name("recap-jobs".to_string())
            .spawn(move || Self::worker_loop(receiver))
            .map_err(|e| RecapError::JobAborted {
                reason: format!("failed to spawn job worker: {e}"),
            })?;
        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    /// Queue `job`; its return value is delivered through the handle.
    pub fn submit<T, F>(&self, job: F) -> RecapResult<JobHandle<T>>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::channel();
        let envelope = Envelope {
            id,
            job: Box::new(move || {
                // The caller may have dropped its handle.
                let _ = tx.send(job());
            }),
        };

        let sender = self.sender.as_ref().ok_or_else(|| RecapError::JobAborted {
            reason: "job queue is shut down".to_string(),
        })?;
        sender.send(envelope).map_err(|_| RecapError::JobAborted {
            reason: "job worker has stopped".to_string(),
        })?;
        info!(job_id = %id, "job queued");
        Ok(JobHandle { id, receiver: rx })
    }

    fn worker_loop(receiver: Receiver<Envelope>) {
        for Envelope { id, job } in receiver {
            let span = info_span!("job", job_id = %id);
            let _guard = span.enter();
            info!("job started");
            match panic::catch_unwind(AssertUnwindSafe(job)) {
                Ok(()) => info!("job finished"),
                Err(_) => error!("job panicked"),
            }
        }
    }
}

impl Drop for JobQueue {
    fn drop(&mut self) {
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                error!("job worker thread panicked");
            }
        }
    }
}
