pub mod config;
pub mod error;
pub mod markup;
pub mod model;
