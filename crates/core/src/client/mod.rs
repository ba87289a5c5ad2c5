pub mod commerce;
pub mod config;
pub mod mock;
