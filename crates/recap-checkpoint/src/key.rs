/// Make a job key safe to use as a file name.
///
/// Every char that is not ASCII alphanumeric, `-` or `_` becomes `_`.
/// Distinct keys may collide after sanitization; callers own key uniqueness.
pub fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
