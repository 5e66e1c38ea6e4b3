pub mod components;
pub mod text;

pub use components::*;
pub use text::render_text;
