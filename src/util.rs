#[inline(always)]
#[cold]
pub(crate) fn cold_path() {}

pub trait ByteOrder: zerocopy::ByteOrder + Send + Sync + 'static {}

impl<T: zerocopy::ByteOrder + Send + Sync + 'static> ByteOrder for T {}

/// Default bound on list/compound nesting when reading.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Knobs for the reader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadOptions {
    /// Maximum number of nested list/compound payloads. A top-level compound
    /// payload counts as depth 1, whether it is read as the value of a root
    /// tag or through [`Compound::read_from`](crate::Compound::read_from).
    pub max_depth: usize,
}

impl Default for ReadOptions {
    #[inline]
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ReadOptions {
    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
