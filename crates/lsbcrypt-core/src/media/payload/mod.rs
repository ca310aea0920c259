mod crypted;
pub mod frame;

pub use crypted::*;
pub use frame::*;
