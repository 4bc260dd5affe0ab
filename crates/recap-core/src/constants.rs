/// recap system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// On-disk checkpoint format version. Files carrying any other version are
/// treated as corrupt and discarded.
pub const CHECKPOINT_FORMAT_VERSION: u32 = 1;

/// Suffix appended to the sanitized job key to form the checkpoint filename.
pub const CHECKPOINT_FILE_SUFFIX: &str = ".checkpoint.json";

/// Suffix of the temporary file a checkpoint is staged in before the rename.
pub const CHECKPOINT_TMP_SUFFIX: &str = ".tmp";

/// Separator placed between partial summaries inside a merge request.
pub const MERGE_SEPARATOR: &str = "\n\n---\n\n";

/// Instruction prefixed to every merge request.
pub const MERGE_INSTRUCTION: &str = "The following notes were produced from consecutive parts of the same \
source. Merge them into one coherent set of notes: keep the original order, remove repetition, \
and preserve every timestamp, heading and image reference.";

/// Image detail level sent with every image part.
pub const IMAGE_DETAIL: &str = "auto";
