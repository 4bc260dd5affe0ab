use recap_core::errors::SizingError;
use recap_core::traits::{ISizeEstimator, ITextMessageBuilder};

/// Greedy 1-D packer for opaque text blocks (already-produced summaries).
///
/// Blocks are never split: a block that cannot fit on its own is an error.
pub struct TextGrouper<'a> {
    builder: &'a dyn ITextMessageBuilder,
    estimator: &'a dyn ISizeEstimator,
    max_bytes: usize,
}

impl<'a> TextGrouper<'a> {
    pub fn new(
        builder: &'a dyn ITextMessageBuilder,
        estimator: &'a dyn ISizeEstimator,
        max_bytes: usize,
    ) -> Self {
        Self {
            builder,
            estimator,
            max_bytes,
        }
    }

    fn size(&self, texts: &[String]) -> usize {
        self.estimator.estimate(&self.builder.build_texts(texts))
    }

    /// Group `texts` in order so that every group's request fits the budget.
    pub fn group(&self, texts: &[String]) -> Result<Vec<Vec<String>>, SizingError> {
        let mut groups = Vec::new();
        let mut idx = 0;

        while idx < texts.len() {
            let mut group: Vec<String> = Vec::new();
            while idx < texts.len() {
                group.push(texts[idx].clone());
                if self.size(&group) <= self.max_bytes {
                    idx += 1;
                    continue;
                }
                group.pop();
                if group.is_empty() {
                    return Err(SizingError::TextBlockTooLarge {
                        index: idx,
                        size: self.size(std::slice::from_ref(&texts[idx])),
                        max_bytes: self.max_bytes,
                    });
                }
                break;
            }
            groups.push(group);
        }

        Ok(groups)
    }
}
