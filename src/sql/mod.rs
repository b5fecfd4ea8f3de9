//! Safe SQL builder: identifiers from `CountryField` only, values as parameters.

mod builder;
pub use builder::*;
