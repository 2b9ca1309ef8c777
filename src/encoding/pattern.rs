//! Wildcard and fuzzy pattern rewriting into regex source
//!
//! Known limitations, kept on purpose:
//! - Wildcard rewriting copies every character other than `*` and `?`
//!   verbatim. Regex metacharacters in the pattern (`.`, `(`, `[` ...) are
//!   not escaped.
//! - Fuzzy output uses the approximate-match quantifier `{s<=N}` (TRE /
//!   Python `regex` dialect). Engines without approximate matching reject or
//!   misread it; the consuming store must support it.

/// Rewrites `*` to `.*` and `?` to `.`; everything else is copied as is.
pub fn wildcard_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 8);
    for c in pattern.chars() {
        match c {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            c => regex.push(c),
        }
    }
    regex
}

/// Builds `(...){s<=max_edits}` where the first `max_edits` characters are
/// wrapped in single-character classes.
pub fn fuzzy_to_regex(text: &str, max_edits: u32) -> String {
    let mut regex = String::with_capacity(text.len() * 3 + 12);
    regex.push('(');
    for (i, c) in text.chars().enumerate() {
        if (i as u64) < u64::from(max_edits) {
            regex.push('[');
            regex.push(c);
            regex.push(']');
        } else {
            regex.push(c);
        }
    }
    regex.push_str("){s<=");
    regex.push_str(&max_edits.to_string());
    regex.push('}');
    regex
}
