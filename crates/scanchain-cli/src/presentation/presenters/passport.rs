use scanchain_core::ViewState;
use scanchain_types::{BatchRecord, BatchStatus, DecodeError};

use crate::presentation::view_models::{
    FieldRowViewModel, FieldValue, InvalidPayloadViewModel, NotFoundViewModel,
    PassportStateViewModel, PassportViewModel, PresentOptions, SectionViewModel, StatusBadge,
    WeightFallback,
};

pub fn present_state(state: &ViewState, options: &PresentOptions) -> PassportStateViewModel {
    match state {
        ViewState::Passport(record) => {
            PassportStateViewModel::Passport(present_passport(record, options))
        }
        ViewState::Invalid(err) => PassportStateViewModel::Invalid(present_error(err)),
        ViewState::NotFound { path } => PassportStateViewModel::NotFound(NotFoundViewModel {
            path: path.clone(),
        }),
    }
}

pub fn present_passport(record: &BatchRecord, options: &PresentOptions) -> PassportViewModel {
    let mut sections = vec![batch_details(record, options)];
    sections.push(contact_section(
        "Farmer Information",
        [
            ("Farmer Name", "👨‍🌾", record.farmer_name.as_ref()),
            ("Village", "🏘️", record.farmer_village.as_ref()),
            ("Phone", "📞", record.farmer_phone.as_ref()),
        ],
    ));
    if options.show_agent_section {
        sections.push(contact_section(
            "Collection Agent",
            [
                ("Agent Name", "👤", record.agent_name.as_ref()),
                ("Location", "📍", record.agent_city.as_ref()),
                ("Phone", "📞", record.agent_phone.as_ref()),
            ],
        ));
    }
    // An entirely empty group renders nothing, header included
    sections.retain(|section| !section.rows.is_empty());

    PassportViewModel {
        id: record.id.clone(),
        status: status_badge(record.status.as_deref()),
        collection_point: record.collection_point.clone(),
        created_at: record.created_at.clone(),
        photo_url: record.photo_url.clone(),
        sections,
    }
}

fn present_error(err: &DecodeError) -> InvalidPayloadViewModel {
    InvalidPayloadViewModel {
        kind: err.kind().to_string(),
        message: err.user_message().to_string(),
        detail: err.detail().map(str::to_string),
    }
}

fn batch_details(record: &BatchRecord, options: &PresentOptions) -> SectionViewModel {
    let mut rows = Vec::new();
    push_weight(
        &mut rows,
        "Gross Weight",
        record.gross_weight.as_ref(),
        options.weight_fallback,
    );
    push_weight(
        &mut rows,
        "Net Weight",
        record.net_weight.as_ref(),
        options.weight_fallback,
    );
    push_row(
        &mut rows,
        "Grade",
        "🏅",
        record.grade.as_ref().map(|g| FieldValue::Text(g.clone())),
    );
    push_row(
        &mut rows,
        "Arrival Date",
        "📅",
        record
            .arrival_date
            .as_ref()
            .map(|d| FieldValue::Date(d.clone())),
    );
    push_row(
        &mut rows,
        "Rejection Rate",
        "📊",
        record
            .rejection_percentage
            .as_ref()
            .map(|p| FieldValue::Percent(p.clone())),
    );
    push_row(
        &mut rows,
        "Confidence Score",
        "✅",
        record.confidence_score.map(FieldValue::Confidence),
    );
    SectionViewModel {
        title: "Batch Details".to_string(),
        rows,
    }
}

fn contact_section(
    title: &str,
    fields: [(&'static str, &'static str, Option<&String>); 3],
) -> SectionViewModel {
    let rows = fields
        .into_iter()
        .filter_map(|(label, icon, value)| {
            value.map(|v| FieldRowViewModel {
                label: label.to_string(),
                icon: icon.to_string(),
                value: FieldValue::Text(v.clone()),
            })
        })
        .collect();
    SectionViewModel {
        title: title.to_string(),
        rows,
    }
}

fn push_row(
    rows: &mut Vec<FieldRowViewModel>,
    label: &str,
    icon: &str,
    value: Option<FieldValue>,
) {
    if let Some(value) = value {
        rows.push(FieldRowViewModel {
            label: label.to_string(),
            icon: icon.to_string(),
            value,
        });
    }
}

fn push_weight(
    rows: &mut Vec<FieldRowViewModel>,
    label: &str,
    value: Option<&String>,
    fallback: WeightFallback,
) {
    let value = match (value, fallback) {
        (Some(weight), _) => FieldValue::WeightKg(weight.clone()),
        (None, WeightFallback::Placeholder) => FieldValue::WeightMissing,
        (None, WeightFallback::Omit) => return,
    };
    rows.push(FieldRowViewModel {
        label: label.to_string(),
        icon: "⚖️".to_string(),
        value,
    });
}

fn status_badge(label: Option<&str>) -> StatusBadge {
    let Some(label) = label else {
        return StatusBadge::neutral("Unknown");
    };
    match BatchStatus::classify(label) {
        BatchStatus::Accepted => StatusBadge::success(label),
        BatchStatus::Pending => StatusBadge::warning(label),
        BatchStatus::Rejected => StatusBadge::error(label),
        BatchStatus::Unknown => StatusBadge::neutral(label),
    }
}
