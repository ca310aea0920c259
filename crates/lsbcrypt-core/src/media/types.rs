use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub use image::RgbImage;
use image::ImageError;
use log::error;

use crate::error::SteganoError;
use crate::result::Result;

use super::Persist;

/// a carrier image for steganography
#[derive(Debug)]
pub struct Media;

impl Media {
    /// opens a lossless image and converts it to 8-bit RGB
    pub fn from_file(f: &Path) -> Result<RgbImage> {
        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            return Err(SteganoError::UnsupportedMedia);
        };

        match ext.to_lowercase().as_str() {
            "png" | "bmp" => image::open(f)
                .map(|i| i.to_rgb8())
                .map_err(|e| match e {
                    ImageError::IoError(source) => {
                        error!("Error reading file {f:?}: {source}");
                        SteganoError::ReadError { source }
                    }
                    e => {
                        error!("Error decoding image {f:?}: {e}");
                        SteganoError::InvalidImageMedia
                    }
                }),
            _ => Err(SteganoError::UnsupportedMedia),
        }
    }
}

impl Persist for RgbImage {
    fn save_as(&self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);

        self.write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                SteganoError::ImageEncodingError
            })
    }
}
