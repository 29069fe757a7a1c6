// NOTE: scanchain CLI Rationale
//
// Why take the URL as an argument (not read ambient state)?
// - The original passport was a hosted page keyed off window.location; the
//   CLI keeps the exact decode-and-render contract but makes the input
//   explicit, so every state is reproducible from a command line
//
// Why one configurable card (not three variants)?
// - The source shipped three near-duplicate iterations of the same view;
//   the differences (agent section, date style, absent-weight policy) are
//   flags here instead of parallel copies
//
// Why exit 0 on error cards?
// - MissingData, CorruptData and NotFound are rendered outcomes, not
//   process failures; nothing in the pipeline is fatal to the host

mod args;
mod commands;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands};
pub use commands::run;
