pub mod site;

pub use site::ImageSite;
