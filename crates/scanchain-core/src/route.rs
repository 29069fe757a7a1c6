/// Where a share target lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Batch,
    NotFound,
}

/// Paths the passport view answers on. The bare root is accepted because
/// QR links printed before the `/batch` route existed still point there.
pub fn resolve(path: &str) -> Route {
    match path.trim_end_matches('/') {
        "" | "/batch" => Route::Batch,
        _ => Route::NotFound,
    }
}

/// Split a share target into its path and query parts.
///
/// Accepts a full URL, an absolute path, or a bare query string. The
/// fragment never reaches the decoder.
pub fn split_target(target: &str) -> (&str, &str) {
    let target = target.split('#').next().unwrap_or(target);
    let path_and_query = if let Some(idx) = target.find("://") {
        let rest = &target[idx + 3..];
        match rest.find(['/', '?']) {
            Some(start) => &rest[start..],
            None => "/",
        }
    } else if target.starts_with('/') {
        target
    } else {
        return ("/", target.strip_prefix('?').unwrap_or(target));
    };
    match path_and_query.split_once('?') {
        Some((path, query)) => (path, query),
        None => (path_and_query, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_passport_routes() {
        assert_eq!(resolve(""), Route::Batch);
        assert_eq!(resolve("/"), Route::Batch);
        assert_eq!(resolve("/batch"), Route::Batch);
        assert_eq!(resolve("/batch/"), Route::Batch);
    }

    #[test]
    fn test_resolve_unknown_routes() {
        assert_eq!(resolve("/about"), Route::NotFound);
        assert_eq!(resolve("/batch/extra"), Route::NotFound);
    }

    #[test]
    fn test_split_full_url() {
        assert_eq!(
            split_target("https://scan.example/batch?data=x"),
            ("/batch", "data=x")
        );
    }

    #[test]
    fn test_split_url_without_path() {
        assert_eq!(split_target("https://scan.example?data=x"), ("", "data=x"));
        assert_eq!(split_target("https://scan.example"), ("/", ""));
    }

    #[test]
    fn test_split_absolute_path() {
        assert_eq!(split_target("/batch?data=x"), ("/batch", "data=x"));
        assert_eq!(split_target("/about"), ("/about", ""));
    }

    #[test]
    fn test_split_bare_query() {
        assert_eq!(split_target("data=x&b=2"), ("/", "data=x&b=2"));
        assert_eq!(split_target("?data=x"), ("/", "data=x"));
    }

    #[test]
    fn test_fragment_is_dropped() {
        assert_eq!(
            split_target("https://scan.example/batch?data=x#section"),
            ("/batch", "data=x")
        );
    }
}
