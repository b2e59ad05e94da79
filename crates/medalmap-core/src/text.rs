// crates/medalmap-core/src/text.rs

/// Convert a string into a folded key suitable for lookups and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Côte d'Ivoire` -> `Cote d'Ivoire`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use medalmap_core::text::fold_key;
///
/// assert_eq!(fold_key("UNITED Kingdom"), "united kingdom");
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}
