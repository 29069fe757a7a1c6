/// Return the still-encoded value of the first occurrence of `name`.
///
/// Grammar follows what `URLSearchParams` accepts: pairs split on `&`,
/// key and value split on the first `=`, a key without `=` maps to the
/// empty value, and a leading `?` is tolerated. Later duplicates never
/// override the first match.
pub fn raw_param<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        if key == name {
            return Some(value);
        }
    }
    None
}
