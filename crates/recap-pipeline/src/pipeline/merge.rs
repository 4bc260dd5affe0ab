use recap_chunking::TextGrouper;
use recap_core::errors::{RecapError, RecapResult, SizingError};
use recap_core::models::CheckpointPhase;
use tracing::{debug, info, warn};

use super::Stage;
use crate::checkpointing::JobCheckpointer;
use crate::engine::JobReport;

/// Merge partials round by round until one remains.
///
/// After each merge call the checkpoint holds this round's merged outputs
/// followed by the originals of the groups not yet merged, a valid restart
/// input on its own. A failed call persists the partials as they stood when
/// the round began.
///
/// A round in which no two partials share a group still runs once, since
/// merging a partial alone usually shortens it. Two such rounds in a row
/// end the job with [`SizingError::MergeStalled`].
pub(crate) fn merge_partials(
    stage: &Stage<'_>,
    partials: Vec<String>,
    checkpointer: &JobCheckpointer<'_>,
    report: &mut JobReport,
) -> RecapResult<String> {
    let grouper = TextGrouper::new(stage.merge_builder, stage.estimator, stage.max_bytes);
    let mut current = partials;
    let mut after_unpaired_round = false;

    while current.len() > 1 {
        let groups = grouper.group(&current)?;
        let unpaired = groups.len() == current.len();
        if unpaired && after_unpaired_round {
            return Err(SizingError::MergeStalled {
                count: current.len(),
                max_bytes: stage.max_bytes,
            }
            .into());
        }
        if unpaired {
            warn!(partials = current.len(), "no partials fit together, merging each alone");
        }
        after_unpaired_round = unpaired;

        report.merge_rounds += 1;
        info!(
            round = report.merge_rounds,
            partials = current.len(),
            groups = groups.len(),
            "merge round"
        );

        let mut merged = Vec::with_capacity(groups.len());
        for (index, group) in groups.iter().enumerate() {
            let request = stage.merge_builder.build_texts(group);
            match stage.complete("merge", &request) {
                Ok(text) => {
                    merged.push(text);
                    report.calls += 1;
                    if checkpointer.is_active() {
                        let mut resumable = merged.clone();
                        resumable.extend(groups[index + 1..].iter().flatten().cloned());
                        checkpointer.save(&resumable, CheckpointPhase::Merge);
                    }
                    debug!(group = index, size = group.len(), "group merged");
                }
                Err(e) => {
                    warn!(round = report.merge_rounds, group = index, error = %e, "merge failed");
                    checkpointer.save(&current, CheckpointPhase::Merge);
                    return Err(e.into());
                }
            }
        }
        current = merged;
    }

    current.into_iter().next().ok_or(RecapError::EmptySource)
}
