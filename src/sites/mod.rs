pub mod topanh;

pub use topanh::TopAnh;
