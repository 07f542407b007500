// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;
pub mod search_bar;

// Primitive wrappers
pub mod dropdown_menu;
pub mod label;
pub mod separator;
pub mod switch;
pub mod toast;

// Shell layout
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use dropdown_menu::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use search_bar::*;
pub use separator::*;
pub use sidebar::*;
pub use switch::*;
pub use toast::*;
