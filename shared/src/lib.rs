//! Wire types shared between the HealthSmart frontend and the backend API.

mod envelope;
mod types;

pub use envelope::*;
pub use types::*;
