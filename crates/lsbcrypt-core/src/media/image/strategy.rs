use std::fmt::{self, Debug, Formatter};

use enum_dispatch::enum_dispatch;
use zeroize::Zeroizing;

use crate::media::{CodecOptions, Concealer};
use crate::permutation::{self, ImageShape, PositionList};
use crate::result::Result;
use crate::SteganoError;

/// decides which color channels carry the bits of a payload
#[enum_dispatch]
pub trait PositionStrategy {
    /// the first `bit_count` positions, in the order the bits are written
    fn positions(&self, shape: ImageShape, bit_count: usize) -> Result<PositionList>;
}

/// The two ways of laying out a payload inside an image.
#[enum_dispatch(PositionStrategy)]
#[derive(Debug)]
pub enum EmbeddingStrategy {
    Permuted(PermutedPositions),
    Sequential(SequentialPositions),
}

impl EmbeddingStrategy {
    /// builds the strategy the options ask for, the permuted one needs a password
    pub fn from_options(options: &CodecOptions, password: Option<&str>) -> Result<Self> {
        match options.concealer {
            Concealer::Permuted => {
                let password = password.ok_or(SteganoError::MissingPassword)?;
                Ok(PermutedPositions::new(password, options.seed_offset).into())
            }
            Concealer::Sequential => Ok(SequentialPositions.into()),
        }
    }

    pub fn permuted<S: Into<String>>(password: S) -> Self {
        PermutedPositions::new(password, 0).into()
    }

    pub fn sequential() -> Self {
        SequentialPositions.into()
    }
}

/// Password keyed positions, see [`permutation::generate`].
pub struct PermutedPositions {
    password: Zeroizing<String>,
    seed_offset: u32,
}

impl PermutedPositions {
    pub fn new<S: Into<String>>(password: S, seed_offset: u32) -> Self {
        Self {
            password: Zeroizing::new(password.into()),
            seed_offset,
        }
    }
}

impl Debug for PermutedPositions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermutedPositions")
            .field("password", &"*".repeat(self.password.len()))
            .field("seed_offset", &self.seed_offset)
            .finish()
    }
}

impl PositionStrategy for PermutedPositions {
    fn positions(&self, shape: ImageShape, bit_count: usize) -> Result<PositionList> {
        permutation::generate(&self.password, shape, bit_count, self.seed_offset)
    }
}

/// Unkeyed positions in flat channel order.
#[derive(Debug, Default)]
pub struct SequentialPositions;

impl PositionStrategy for SequentialPositions {
    fn positions(&self, shape: ImageShape, bit_count: usize) -> Result<PositionList> {
        permutation::sequential(shape, bit_count)
    }
}
