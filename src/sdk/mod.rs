pub mod config;
pub mod host;
pub mod routing;
pub mod util;
