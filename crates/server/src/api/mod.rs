mod flags;
pub use flags::*;

mod session;
pub use session::*;
