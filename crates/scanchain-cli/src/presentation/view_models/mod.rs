pub mod common;
pub mod options;
pub mod passport;

pub use common::{OutputFormat, StatusBadge, StatusLevel};
pub use options::{DateFormat, DisplayOptions, PresentOptions, WeightFallback};
pub use passport::{
    FieldRowViewModel, FieldValue, InvalidPayloadViewModel, NotFoundViewModel,
    PassportStateViewModel, PassportViewModel, SectionViewModel,
};
