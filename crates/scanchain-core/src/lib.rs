// NOTE: Pipeline Rationale
//
// Why explicit targets (not ambient location state)?
// - The original view read window.location directly, which made the decode
//   path untestable outside a hosted page
// - Passing the URL/query in as an argument keeps the whole pipeline a pure
//   function of its input: same target, same rendered field set
//
// Why strict percent-decoding (not lossy)?
// - The producer serializes with encodeURIComponent, and the browser decoder
//   it was paired with throws on malformed escapes
// - A lossy decode would silently feed garbage into the JSON parser and
//   misreport the failure as a syntax error in valid-looking input
//
// Why one decode per invocation?
// - The view is display-only, not reactive; all states are terminal
// - Re-running the pipeline on the same target must yield the same state

pub mod decode;
pub mod query;
pub mod route;
pub mod state;

pub use decode::{decode_payload, decode_query};
pub use route::Route;
pub use state::{ViewState, resolve_payload, resolve_target};

/// Query parameter carrying the percent-encoded passport payload.
pub const DATA_PARAM: &str = "data";
