pub mod hide;
pub mod shared;
pub mod unveil;
pub mod unveil_raw;
