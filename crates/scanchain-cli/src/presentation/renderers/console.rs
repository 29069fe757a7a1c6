use anyhow::Result;

use crate::presentation::view_models::{DisplayOptions, OutputFormat, PassportStateViewModel};
use crate::presentation::views::{InvalidPayloadView, NotFoundView, PassportView};

/// Output driver: JSON dumps the full view model, text delegates to the
/// per-state Display views.
pub struct ConsolePassportRenderer;

impl ConsolePassportRenderer {
    pub fn render(
        &self,
        state: &PassportStateViewModel,
        format: OutputFormat,
        options: &DisplayOptions,
    ) -> Result<()> {
        match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(state)?);
            }
            OutputFormat::Text => match state {
                PassportStateViewModel::Passport(vm) => {
                    print!("{}", PassportView { data: vm, options });
                }
                PassportStateViewModel::Invalid(vm) => {
                    print!("{}", InvalidPayloadView { data: vm, options });
                }
                PassportStateViewModel::NotFound(vm) => {
                    print!("{}", NotFoundView { data: vm, options });
                }
            },
        }
        Ok(())
    }
}
