//! Score token normalization.
//!
//! GHIN decorates posted scores with type suffixes (`A` away, `H` home,
//! `T` tournament, `C` combined nines...). Only the leading number matters.

use crate::models::ScoreEntry;

/// Parse the leading `digits[.digits]` run of a score token.
///
/// Trailing characters are ignored. Returns `None` when the token does not
/// start with a digit.
///
/// # Examples
/// ```
/// use ghin_core::analysis::score::parse_score;
///
/// assert_eq!(parse_score("82"), Some(82.0));
/// assert_eq!(parse_score("91A"), Some(91.0));
/// assert_eq!(parse_score("NC"), None);
/// ```
pub fn parse_score(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let whole = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if whole == 0 {
        return None;
    }

    let mut end = whole;
    if bytes.get(whole) == Some(&b'.') {
        let fraction = bytes[whole + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        // "82." keeps only the integer part
        if fraction > 0 {
            end = whole + 1 + fraction;
        }
    }

    token[..end].parse().ok()
}

/// Numeric score of a round, if its token has one.
pub fn score_value(entry: &ScoreEntry) -> Option<f64> {
    entry.score().and_then(parse_score)
}
