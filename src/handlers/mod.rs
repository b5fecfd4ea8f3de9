//! HTTP handlers for the country resource and the HTML listing.

pub mod country;
pub mod page;
pub use country::*;
pub use page::*;
