use anyhow::Result;
use scanchain_core::ViewState;
use scanchain_types::BatchRecord;

use crate::presentation::presenters;
use crate::presentation::renderers::ConsolePassportRenderer;
use crate::presentation::view_models::{DisplayOptions, OutputFormat, PresentOptions};

pub fn handle(
    format: OutputFormat,
    present: PresentOptions,
    display: DisplayOptions,
) -> Result<()> {
    let state = ViewState::Passport(sample_record());
    let view_model = presenters::passport::present_state(&state, &present);
    ConsolePassportRenderer.render(&view_model, format, &display)
}

fn sample_record() -> BatchRecord {
    BatchRecord {
        id: Some("A1042".to_string()),
        status: Some("Accepted".to_string()),
        gross_weight: Some("120".to_string()),
        net_weight: Some("110".to_string()),
        grade: Some("A".to_string()),
        arrival_date: Some("2024-01-05".to_string()),
        created_at: Some("2024-01-04T09:30:00Z".to_string()),
        rejection_percentage: Some("2.5".to_string()),
        confidence_score: Some(0.873),
        collection_point: Some("Nakuru Collection Hub".to_string()),
        photo_url: Some("https://assets.scanchain.example/batches/A1042.jpg".to_string()),
        farmer_name: Some("J. Otieno".to_string()),
        farmer_village: Some("Kiptere".to_string()),
        farmer_phone: Some("+254 700 000000".to_string()),
        agent_name: Some("M. Wanjiru".to_string()),
        agent_city: Some("Nakuru".to_string()),
        agent_phone: Some("+254 711 000000".to_string()),
    }
}
