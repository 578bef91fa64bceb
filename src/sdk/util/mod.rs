pub mod latest;
pub mod log;
