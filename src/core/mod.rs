pub mod error;
pub mod tax;

pub use error::{AppError, Result};
