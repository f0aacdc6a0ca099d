pub mod errors;
pub mod logging;
pub mod lottery;
pub mod surface;
pub mod theme;
