use serde::Serialize;

use super::common::StatusBadge;

/// Everything a render pass can produce. Serialized whole for JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PassportStateViewModel {
    Passport(PassportViewModel),
    Invalid(InvalidPayloadViewModel),
    NotFound(NotFoundViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct PassportViewModel {
    pub id: Option<String>,
    pub status: StatusBadge,
    pub collection_point: Option<String>,
    /// Raw stored timestamp; the view decides the calendar style.
    pub created_at: Option<String>,
    pub photo_url: Option<String>,
    /// Only sections with at least one row appear here.
    pub sections: Vec<SectionViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionViewModel {
    pub title: String,
    pub rows: Vec<FieldRowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldRowViewModel {
    pub label: String,
    pub icon: String,
    pub value: FieldValue,
}

/// Typed row values; the text view owns the formatting of each kind.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    /// Raw stored date string
    Date(String),
    /// Weight magnitude as stored, without the unit
    WeightKg(String),
    /// Placeholder row kept under the placeholder fallback policy
    WeightMissing,
    /// Percentage as stored, without the sign
    Percent(String),
    /// Fraction in [0, 1]
    Confidence(f64),
}

#[derive(Debug, Clone, Serialize)]
pub struct InvalidPayloadViewModel {
    /// "missing_data" or "corrupt_data"
    pub kind: String,
    /// User-facing copy, distinct per kind
    pub message: String,
    /// Decoder or parser detail, corrupt payloads only
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotFoundViewModel {
    pub path: String,
}
