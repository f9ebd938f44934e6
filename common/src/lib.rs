pub mod logger;
pub mod status;
