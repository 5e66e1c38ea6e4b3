//! Market depth aggregate: ladder rows, value objects, and the rendering core.

pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use services::*;
pub use value_objects::*;
