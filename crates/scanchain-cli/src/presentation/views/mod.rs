mod error;
mod not_found;
mod passport;

pub use error::InvalidPayloadView;
pub use not_found::NotFoundView;
pub use passport::PassportView;

/// Card body width in columns, shared by every card frame.
pub(crate) const CARD_WIDTH: usize = 46;

pub(crate) fn card_rule() -> String {
    "━".repeat(CARD_WIDTH)
}
