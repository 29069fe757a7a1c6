mod coerce;
pub mod error;
pub mod record;
pub mod status;

pub use error::{DecodeError, Result};
pub use record::BatchRecord;
pub use status::BatchStatus;
