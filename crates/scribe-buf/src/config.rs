//! Buffer configuration parameters.

/// How a [`TextBuf`](crate::TextBuf) picks its next capacity when a write
/// does not fit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Grow to `capacity + capacity / 2 + additional`.
    ///
    /// Repeated small appends reallocate a logarithmic number of times.
    #[default]
    Amortized,
    /// Grow to exactly `len + additional`.
    ///
    /// For buffers whose final size is known up front; every growth is a
    /// reallocation.
    Exact,
}

impl GrowthPolicy {
    /// Capacity to grow to so that `additional` more bytes fit after `len`.
    ///
    /// Returns `None` on arithmetic overflow. The result is never below
    /// `capacity` nor below `len + additional`.
    pub fn next_capacity(self, capacity: usize, len: usize, additional: usize) -> Option<usize> {
        let required = len.checked_add(additional)?;
        let grown = match self {
            Self::Amortized => capacity.checked_add(capacity / 2)?.checked_add(additional)?,
            Self::Exact => required,
        };
        Some(grown.max(required).max(capacity))
    }
}

/// Configuration for a [`TextBuf`](crate::TextBuf).
///
/// All values are fixed once the buffer is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufConfig {
    /// Bytes allocated at construction.
    ///
    /// Default: 0, meaning nothing is allocated until the first write.
    pub initial_capacity: usize,

    /// Growth policy used by [`TextBuf::ensure`](crate::TextBuf::ensure).
    ///
    /// Default: [`GrowthPolicy::Amortized`].
    pub growth: GrowthPolicy,
}

impl BufConfig {
    /// Default initial capacity: allocate lazily.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

    /// Create a config with the given initial capacity and default growth.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth: GrowthPolicy::default(),
        }
    }

    /// Replace the growth policy.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }
}

impl Default for BufConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
