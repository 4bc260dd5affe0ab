//! Per-job checkpoint handle. Inert when the job has no key or the engine
//! has no store; write failures are logged and never fail the job.

use recap_checkpoint::{CheckpointStore, SourceSignature};
use recap_core::models::{Checkpoint, CheckpointPhase};
use tracing::warn;

struct Target<'a> {
    store: &'a CheckpointStore,
    key: &'a str,
    signature: SourceSignature,
}

pub(crate) struct JobCheckpointer<'a> {
    target: Option<Target<'a>>,
}

impl<'a> JobCheckpointer<'a> {
    pub(crate) fn new(
        store: Option<&'a CheckpointStore>,
        key: Option<&'a str>,
        signature: impl FnOnce() -> SourceSignature,
    ) -> Self {
        let target = match (store, key) {
            (Some(store), Some(key)) => Some(Target {
                store,
                key,
                signature: signature(),
            }),
            _ => None,
        };
        Self { target }
    }

    pub(crate) fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub(crate) fn load(&self) -> Option<Checkpoint> {
        let t = self.target.as_ref()?;
        t.store.read(t.key, &t.signature)
    }

    pub(crate) fn save(&self, partials: &[String], phase: CheckpointPhase) {
        let Some(t) = &self.target else {
            return;
        };
        if let Err(e) = t.store.write(t.key, &t.signature, partials, phase) {
            warn!(key = t.key, phase = %phase, error = %e, "checkpoint write failed, continuing");
        }
    }

    pub(crate) fn clear(&self) {
        let Some(t) = &self.target else {
            return;
        };
        if let Err(e) = t.store.clear(t.key) {
            warn!(key = t.key, error = %e, "checkpoint clear failed");
        }
    }
}
