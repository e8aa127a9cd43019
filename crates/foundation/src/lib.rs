pub mod math;

// Foundation crate: small, well-tested geographic primitives only.
pub use math::*;
