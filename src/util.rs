pub(crate) fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        value.to_lowercase()
    }
}

/// Returns `true` when `value` is a non-empty RFC 9110 `token`.
pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Returns `true` when `value` can be carried in a header field without
/// escaping: visible ASCII, spaces and horizontal tabs only.
pub(crate) fn is_header_value(value: &str) -> bool {
    value
        .bytes()
        .all(|byte| byte == b'\t' || (0x20..0x7f).contains(&byte))
}

/// Trims every entry and drops blanks and case-insensitive duplicates,
/// keeping the first spelling seen.
pub(crate) fn dedupe_trimmed<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = std::collections::HashSet::new();
    let mut deduped = Vec::new();
    for value in values {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(normalize_lower(&trimmed)) {
            deduped.push(trimmed);
        }
    }
    deduped
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
