use serde::Deserialize;

use crate::coerce;

/// The decoded passport payload.
///
/// Entirely producer-defined: no field is required, unknown fields are
/// ignored, and nothing is validated beyond display coercion. A record
/// lives for one render pass and is never mutated after decode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchRecord {
    #[serde(deserialize_with = "coerce::display_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub gross_weight: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub net_weight: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub grade: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub arrival_date: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub rejection_percentage: Option<String>,
    /// Fraction in [0, 1]; the card shows it scaled to a percentage.
    #[serde(deserialize_with = "coerce::fraction")]
    pub confidence_score: Option<f64>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub collection_point: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub photo_url: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub farmer_name: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub farmer_village: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub farmer_phone: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub agent_name: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub agent_city: Option<String>,
    #[serde(deserialize_with = "coerce::display_string")]
    pub agent_phone: Option<String>,
}

impl BatchRecord {
    /// True when any farmer field is present.
    pub fn has_farmer_info(&self) -> bool {
        self.farmer_name.is_some() || self.farmer_village.is_some() || self.farmer_phone.is_some()
    }

    /// True when any collection-agent field is present.
    pub fn has_agent_info(&self) -> bool {
        self.agent_name.is_some() || self.agent_city.is_some() || self.agent_phone.is_some()
    }
}
