pub mod error;
pub mod generator;
pub mod seed;
pub mod seeds;
pub mod settings;
pub mod taxonomy;
