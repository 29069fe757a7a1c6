use anyhow::Result;
use scanchain_core::state;

use crate::presentation::presenters;
use crate::presentation::renderers::ConsolePassportRenderer;
use crate::presentation::view_models::{DisplayOptions, OutputFormat, PresentOptions};

pub struct ShowRequest {
    pub target: String,
    pub raw: bool,
    pub format: OutputFormat,
    pub present: PresentOptions,
    pub display: DisplayOptions,
}

pub fn handle(request: ShowRequest) -> Result<()> {
    let state = if request.raw {
        state::resolve_payload(&request.target)
    } else {
        state::resolve_target(&request.target)
    };

    let view_model = presenters::passport::present_state(&state, &request.present);
    ConsolePassportRenderer.render(&view_model, request.format, &request.display)
}
