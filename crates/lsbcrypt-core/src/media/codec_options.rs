/// Codec configuration for embedding and extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// The concealer strategy, decides on which color channels carry the data.
    pub concealer: Concealer,

    /// Mixed into the password hash that seeds the position generator.
    /// Embedding and extraction must agree on it.
    pub seed_offset: u32,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            concealer: Concealer::Permuted,
            seed_offset: 0,
        }
    }
}

impl CodecOptions {
    pub fn with_concealer(mut self, concealer: Concealer) -> Self {
        self.concealer = concealer;
        self
    }

    pub fn with_seed_offset(mut self, seed_offset: u32) -> Self {
        self.seed_offset = seed_offset;
        self
    }
}

/// Concealer strategy for LSB encoding
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq)]
pub enum Concealer {
    /// password keyed, pseudo random order of color channels
    Permuted,
    /// unkeyed baseline, color channels in their natural order
    Sequential,
}
