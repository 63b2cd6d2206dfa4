//! Core types, referrer parsing, and errors for search revenue attribution.

pub mod columns;
pub mod error;
pub mod hit;
pub mod product;
pub mod referrer;
pub mod rows;
pub mod settings;

pub use error::{Error, Result};
pub use hit::*;
pub use product::*;
pub use referrer::*;
pub use rows::*;
pub use settings::*;
