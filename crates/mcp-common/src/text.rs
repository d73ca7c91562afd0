//! Casing helpers shared by template and naming tools.
//!
//! Only the leading character is ever touched: `"userProfile"` becomes
//! `"UserProfile"`, `"HTTPClient"` becomes `"hTTPClient"`. Names are never split
//! into words here.

/// Upper-cases the first character and leaves the rest as-is.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character and leaves the rest as-is.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Concatenates words with each word's first character upper-cased.
pub fn pascal_join<S: AsRef<str>>(words: &[S]) -> String {
    words.iter().map(|w| upper_first(w.as_ref())).collect()
}
