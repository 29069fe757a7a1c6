//! # Presentation Layer
//!
//! User interface logic for the CLI, kept strictly unidirectional:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (Controller)      (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//!                                                                                (Layout)
//! ```
//!
//! Rules of the layer:
//!
//! * **ViewModels hold raw data, not formatted strings.** JSON output is an
//!   API; clients get `"0.873"` territory values, the text card gets "87.3%".
//! * **Presenters decide what exists.** Field suppression, group suppression,
//!   the absent-weight policy and the agent-section toggle all happen here,
//!   so the row set is identical for JSON and text output.
//! * **Views decide how it looks.** Layout, colors, unit suffixes and date
//!   formatting live in `fmt::Display` impls over borrowed view models,
//!   driven by `DisplayOptions`. JSON ignores `DisplayOptions` entirely.
//! * **Formatters are dumb string utilities** shared by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::ConsolePassportRenderer;
pub use view_models::{DisplayOptions, OutputFormat, PresentOptions, StatusBadge, StatusLevel};
