pub mod circle;
pub mod geodesy;

pub use circle::*;
pub use geodesy::*;
