pub use crate::error::{AppError, Result};
