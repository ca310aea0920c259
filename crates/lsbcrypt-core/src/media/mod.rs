pub mod codec_options;
pub mod image;
pub mod payload;
mod types;

use std::path::Path;

pub use codec_options::{CodecOptions, Concealer};
pub use types::*;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
