//! Password keyed selection of the color channels that carry data.
//!
//! A password and a seed offset are hashed into a 32 bit seed. The seed drives a
//! ChaCha20 PRNG that samples distinct channel indices out of the whole image,
//! without replacement. The order of the samples is part of the secret: bit `i`
//! of the payload always lands at the `i`-th sampled position.
//!
//! Sampling is a sparse partial Fisher-Yates shuffle. Step `i` only swaps slot `i`
//! with a slot drawn from `i..population`, so the first `k` samples depend on the
//! seed and the population size alone. Asking for more samples later on yields
//! the same prefix, which is what the two phase extraction relies on.

use std::collections::HashMap;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

use crate::result::Result;
use crate::SteganoError;

/// color channels per pixel, the carrier is always 8-bit RGB
pub const CHANNELS: usize = 3;

/// Dimensions of a pixel matrix of `height x width x 3` color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageShape {
    pub height: usize,
    pub width: usize,
}

impl ImageShape {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// number of addressable bits, one per color channel
    pub fn capacity(&self) -> usize {
        self.height * self.width * CHANNELS
    }
}

/// Address of a single color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
    pub channel: usize,
}

impl Position {
    /// maps a flat channel index of a row major RGB buffer to its address
    pub fn from_index(idx: usize, width: usize) -> Self {
        let pixel = idx / CHANNELS;
        Self {
            row: pixel / width,
            col: pixel % width,
            channel: idx % CHANNELS,
        }
    }

    /// flat index into a row major RGB buffer
    pub fn flat_index(&self, width: usize) -> usize {
        (self.row * width + self.col) * CHANNELS + self.channel
    }
}

pub type PositionList = Vec<Position>;

/// hashes `password ‖ seed_offset` and keeps the lowest 32 bits of the digest
pub fn derive_seed(password: &str, seed_offset: u32) -> u32 {
    let digest = Sha256::new()
        .chain_update(password.as_bytes())
        .chain_update(seed_offset.to_string().as_bytes())
        .finalize();

    // the digest read as a big endian integer, modulo 2^32
    u32::from_be_bytes([digest[28], digest[29], digest[30], digest[31]])
}

/// samples `count` distinct indices out of `0..population`, in a seed determined order
pub fn sample_indices(seed: u32, population: usize, count: usize) -> Result<Vec<usize>> {
    if count > population {
        return Err(SteganoError::ImageCapacityError {
            required: count,
            available: population,
        });
    }

    let mut rng = ChaCha20Rng::seed_from_u64(u64::from(seed));
    // slots that were swapped away from their identity value
    let mut displaced: HashMap<u64, u64> = HashMap::with_capacity(count.saturating_mul(2));
    let population = population as u64;

    let mut samples = Vec::with_capacity(count);
    for i in 0..count as u64 {
        // u64 keeps the drawn sequence identical on 32 and 64 bit targets
        let j = rng.gen_range(i..population);
        let at_j = displaced.get(&j).copied().unwrap_or(j);
        let at_i = displaced.get(&i).copied().unwrap_or(i);
        displaced.insert(j, at_i);
        samples.push(at_j as usize);
    }

    Ok(samples)
}

/// generates the keyed position list for `bit_count` bits
pub fn generate(
    password: &str,
    shape: ImageShape,
    bit_count: usize,
    seed_offset: u32,
) -> Result<PositionList> {
    let seed = derive_seed(password, seed_offset);
    let indices = sample_indices(seed, shape.capacity(), bit_count)?;
    log::debug!(
        "generated {} keyed positions out of {} channels",
        indices.len(),
        shape.capacity()
    );

    Ok(indices
        .into_iter()
        .map(|idx| Position::from_index(idx, shape.width))
        .collect())
}

/// unkeyed positions in flat channel order, starting at the first channel
pub fn sequential(shape: ImageShape, bit_count: usize) -> Result<PositionList> {
    if bit_count > shape.capacity() {
        return Err(SteganoError::ImageCapacityError {
            required: bit_count,
            available: shape.capacity(),
        });
    }

    Ok((0..bit_count)
        .map(|idx| Position::from_index(idx, shape.width))
        .collect())
}
