pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod presenter;

pub use error::{AdminError, Result};
