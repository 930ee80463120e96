//! Common types shared by the banner renderer and the HTTP service.

pub mod color;
pub mod error;
pub mod spec;

pub use color::Rgb;
pub use error::{BannerError, BannerResult};
pub use spec::BannerSpec;
