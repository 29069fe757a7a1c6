/// Batch lifecycle status as asserted by the producer.
///
/// The payload carries a free-form string; anything outside the three
/// known labels renders as a neutral badge instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Pending,
    Accepted,
    Rejected,
    Unknown,
}

impl BatchStatus {
    pub fn classify(label: &str) -> Self {
        match label {
            "Pending" => BatchStatus::Pending,
            "Accepted" => BatchStatus::Accepted,
            "Rejected" => BatchStatus::Rejected,
            _ => BatchStatus::Unknown,
        }
    }
}
