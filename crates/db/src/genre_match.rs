use strum_macros::{AsRefStr, EnumString};

/// How a requested genre identifier is compared with the `genre_id` of the
/// `movies_genres` association rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum GenreMatch {
    /// The association's genre identifier, as text, contains the request as a substring.
    /// Filtering by `1` therefore also returns movies linked to genres `10`, `11`, `21`...
    Substring,

    /// The association's genre identifier equals the request parsed as an integer.
    Exact,
}

impl Default for GenreMatch {
    fn default() -> Self {
        GenreMatch::Substring
    }
}

/// Builds a `LIKE` pattern that matches any text containing `input` verbatim.
pub(crate) fn contains_pattern(input: &str) -> String {
    let mut pattern = String::with_capacity(input.len() + 2);
    pattern.push('%');
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
