pub mod event;
pub mod layout;

pub use event::*;
pub use layout::*;
