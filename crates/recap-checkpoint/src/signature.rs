//! Deterministic digest of everything that determines a job's output.

use std::fmt;

use recap_core::models::JobContext;
use recap_core::{JobSource, RecapConfig};

/// Hex blake3 digest over model, temperature, byte budget, job context,
/// image URLs and every segment.
///
/// Any change to those inputs yields a different signature, so a checkpoint
/// written for one input is never resumed against another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceSignature(String);

/// Length-prefixed field writer, so adjacent fields cannot run together.
struct Digest(blake3::Hasher);

impl Digest {
    fn bytes(&mut self, bytes: &[u8]) {
        self.0.update(&(bytes.len() as u64).to_le_bytes());
        self.0.update(bytes);
    }

    fn str(&mut self, s: &str) {
        self.bytes(s.as_bytes());
    }

    fn opt(&mut self, s: Option<&str>) {
        match s {
            Some(s) => {
                self.0.update(&[1]);
                self.str(s);
            }
            None => {
                self.0.update(&[0]);
            }
        }
    }

    fn f64(&mut self, v: f64) {
        self.0.update(&v.to_bits().to_le_bytes());
    }

    fn len(&mut self, n: usize) {
        self.0.update(&(n as u64).to_le_bytes());
    }

    fn context(&mut self, ctx: &JobContext) {
        self.opt(ctx.title.as_deref());
        self.opt(ctx.tags.as_deref());
        self.len(ctx.format.len());
        for item in &ctx.format {
            self.str(item);
        }
        self.opt(ctx.style.as_deref());
        self.opt(ctx.extras.as_deref());
    }
}

impl SourceSignature {
    pub fn compute(source: &JobSource, config: &RecapConfig) -> Self {
        let mut d = Digest(blake3::Hasher::new());
        d.str(&config.provider.model);
        d.f64(config.provider.temperature);
        d.len(config.request.max_request_bytes);
        d.context(&source.context);

        d.len(source.image_urls.len());
        for url in &source.image_urls {
            d.str(url);
        }

        d.len(source.segments.len());
        for seg in &source.segments {
            d.f64(seg.start);
            d.f64(seg.end);
            d.str(&seg.text);
        }

        Self(d.0.finalize().to_hex().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
