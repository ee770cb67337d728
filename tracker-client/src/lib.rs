mod client;
pub mod constants;
pub mod error;

pub use client::*;
pub use constants::TRACKER_BASE_URL;
pub use error::{Error, Result};
