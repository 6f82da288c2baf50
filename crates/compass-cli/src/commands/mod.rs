pub mod config;
pub mod greet;
pub mod lookup;
pub mod quiz;
