pub mod constants;
pub mod draw_circle;
pub mod host;
pub mod input;
pub mod mode;
pub mod recording;
pub mod session;

pub use constants::*;
pub use draw_circle::*;
pub use host::*;
pub use input::*;
pub use mode::*;
pub use recording::*;
pub use session::*;
