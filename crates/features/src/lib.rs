pub mod circle;
pub mod coord_path;
pub mod error;
pub mod feature;
pub mod geojson;
pub mod id;
pub mod polygon;
pub mod store;

pub use circle::*;
pub use coord_path::*;
pub use error::*;
pub use feature::*;
pub use geojson::*;
pub use id::*;
pub use polygon::*;
pub use store::*;
