use scanchain_types::{BatchRecord, DecodeError};

use crate::decode;
use crate::route::{self, Route};

/// Terminal states of a single render pass.
///
/// Decoding is synchronous, so there is no intermediate loading state to
/// model: every invocation lands in exactly one of these, and each one
/// renders something visible.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Passport(BatchRecord),
    Invalid(DecodeError),
    NotFound { path: String },
}

/// Run the whole pipeline once: route, extract, decode, parse.
pub fn resolve_target(target: &str) -> ViewState {
    let (path, query) = route::split_target(target);
    match route::resolve(path) {
        Route::NotFound => ViewState::NotFound {
            path: path.to_string(),
        },
        Route::Batch => match decode::decode_query(query) {
            Ok(record) => ViewState::Passport(record),
            Err(err) => ViewState::Invalid(err),
        },
    }
}

/// Entry point for callers that already extracted the parameter value.
pub fn resolve_payload(raw: &str) -> ViewState {
    match decode::decode_payload(raw) {
        Ok(record) => ViewState::Passport(record),
        Err(err) => ViewState::Invalid(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_passport_from_full_url() {
        let state = resolve_target(
            "https://scan.example/batch?data=%7B%22id%22%3A%22A102%22%2C%22status%22%3A%22Accepted%22%7D",
        );
        match state {
            ViewState::Passport(record) => {
                assert_eq!(record.id.as_deref(), Some("A102"));
                assert_eq!(record.status.as_deref(), Some("Accepted"));
            }
            other => panic!("expected passport, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_data_from_bare_query() {
        assert_eq!(
            resolve_target("other=1"),
            ViewState::Invalid(DecodeError::MissingData)
        );
    }

    #[test]
    fn test_corrupt_data_surfaces_its_own_kind() {
        match resolve_target("/batch?data=%7Bnotjson") {
            ViewState::Invalid(DecodeError::CorruptData(_)) => {}
            other => panic!("expected corrupt data, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            resolve_target("https://scan.example/settings?data=x"),
            ViewState::NotFound {
                path: "/settings".to_string()
            }
        );
    }

    #[test]
    fn test_resolution_is_pure() {
        let target = "/batch?data=%7B%22id%22%3A%22A102%22%7D";
        assert_eq!(resolve_target(target), resolve_target(target));
    }
}
