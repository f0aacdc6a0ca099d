//! Lottery aggregate: number sets, draw records and draw discovery.

pub mod entities;
pub mod locator;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use locator::*;
pub use repositories::*;
pub use services::*;
pub use value_objects::*;
