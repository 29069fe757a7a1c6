use std::fmt;

use owo_colors::OwoColorize;

use super::card_rule;
use crate::presentation::view_models::{DisplayOptions, InvalidPayloadViewModel};

/// Error card for undecodable payloads. The message already carries the
/// failure kind; this view never swaps it for generic copy.
pub struct InvalidPayloadView<'a> {
    pub data: &'a InvalidPayloadViewModel,
    pub options: &'a DisplayOptions,
}

impl fmt::Display for InvalidPayloadView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rule = card_rule();
        writeln!(f, "{}", rule)?;
        if self.options.enable_color {
            writeln!(f, "  {}", "Scanchain".bright_green().bold())?;
        } else {
            writeln!(f, "  Scanchain")?;
        }
        writeln!(f, "{}", rule)?;
        writeln!(f)?;

        if self.options.enable_color {
            writeln!(f, "  ⚠️ {}", "Invalid QR Code".red().bold())?;
        } else {
            writeln!(f, "  ⚠️ Invalid QR Code")?;
        }
        writeln!(f, "  {}", self.data.message)?;
        writeln!(f)?;
        writeln!(f, "  Scan a valid Scanchain batch QR code to view batch details.")?;
        Ok(())
    }
}
