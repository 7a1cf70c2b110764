//! Identifier conventions shared by extraction, analysis and generation.

/// Prefix of synthesized names for unlabeled fields.
pub const POSITIONAL_PREFIX: &str = "index_";

/// Synthesized name for the unlabeled field at `position`.
pub fn positional_name(position: usize) -> String {
    format!("{POSITIONAL_PREFIX}{position}")
}

/// Whether `label` has the shape of a synthesized positional name
/// (`index_<digits>`, ASCII case-insensitive).
pub fn is_positional_name(label: &str) -> bool {
    let prefix_len = POSITIONAL_PREFIX.len();
    if label.len() <= prefix_len || !label.is_char_boundary(prefix_len) {
        return false;
    }
    let (prefix, digits) = label.split_at(prefix_len);
    prefix.eq_ignore_ascii_case(POSITIONAL_PREFIX) && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Convert a case name such as `HttpError` to `http_error`.
///
/// Runs of capitals stay together (`HTTPError` → `http_error`).
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                None | Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) => p.is_uppercase() && next.is_some_and(char::is_lowercase),
            };
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
