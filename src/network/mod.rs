pub mod client;
pub mod middleware;

pub use client::{Fetched, SiteClient};
