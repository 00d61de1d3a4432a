//! Common utility functions shared across the codebase.

/// Rust keywords that cannot be used as enum variant names.
///
/// Covers the strict keywords plus the reserved ones; raw identifiers are
/// deliberately not emitted, so a keyword disqualifies the token outright.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Checks if the token is usable as a generated enum variant name.
///
/// # Examples
///
/// ```
/// use locgen::utils::is_valid_enumerator;
///
/// assert!(is_valid_enumerator("HELLO"));
/// assert!(is_valid_enumerator("de_DE"));
/// assert!(is_valid_enumerator("_private"));
/// assert!(!is_valid_enumerator("2FAST"));
/// assert!(!is_valid_enumerator("HELLO WORLD"));
/// assert!(!is_valid_enumerator("type"));
/// assert!(!is_valid_enumerator(""));
/// ```
pub fn is_valid_enumerator(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return false;
    }
    !KEYWORDS.contains(&token)
}

/// Maps a language code to its enumerator token by replacing every
/// non-alphanumeric character with an underscore.
///
/// # Examples
///
/// ```
/// use locgen::utils::sanitize_language_token;
///
/// assert_eq!(sanitize_language_token("de-DE"), "de_DE");
/// assert_eq!(sanitize_language_token("zh-Hans-CN"), "zh_Hans_CN");
/// assert_eq!(sanitize_language_token("en"), "en");
/// ```
pub fn sanitize_language_token(code: &str) -> String {
    code.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
