pub mod coordinator;
pub mod history_presenter;
pub mod theme_controller;
pub mod use_cases;

pub use coordinator::*;
pub use history_presenter::*;
pub use theme_controller::*;
pub use use_cases::*;
