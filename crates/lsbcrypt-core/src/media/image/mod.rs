pub mod lsb_codec;
pub mod strategy;

pub use lsb_codec::LsbCodec;
pub use strategy::{EmbeddingStrategy, PermutedPositions, PositionStrategy, SequentialPositions};
