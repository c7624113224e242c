/**
 * Slug Generation
 * Normalizes free text into URL-safe identifiers for blog posts and tags
 */
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters that never appear in a slug.
    static ref DISALLOWED: Regex = Regex::new(r"[^a-z0-9 -]").unwrap();
    /// Runs of whitespace, collapsed to a single hyphen.
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    /// Runs of hyphens, collapsed to one.
    static ref HYPHENS: Regex = Regex::new(r"-+").unwrap();
    /// Valid slug pattern: lowercase letters, numbers, and hyphens
    static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Derive a URL-safe slug from arbitrary text.
///
/// Lowercases, strips everything outside `[a-z0-9 -]`, collapses whitespace
/// and hyphen runs to single hyphens, and trims leading/trailing hyphens.
/// Pure and deterministic; empty input produces an empty string, which
/// callers must guard against before persisting a slug.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let cleaned = DISALLOWED.replace_all(&lower, "");
    let hyphenated = WHITESPACE.replace_all(cleaned.trim(), "-");
    let collapsed = HYPHENS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Check that a string already is a well-formed slug.
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_REGEX.is_match(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(slugify("  multiple   spaces "), "multiple-spaces");
    }

    #[test]
    fn collapses_hyphen_runs() {
        assert_eq!(slugify("beach -- wedding"), "beach-wedding");
        assert_eq!(slugify("--already-hyphenated--"), "already-hyphenated");
    }

    #[test]
    fn idempotent_on_its_own_output() {
        for input in ["Udaipur Magic", "  A  B  ", "Déjà vu!", "100% Fun"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn empty_and_symbol_only_input_produce_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn validates_slug_shape() {
        assert!(is_valid_slug("beach-wedding"));
        assert!(is_valid_slug("post2024"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("Upper-Case"));
        assert!(!is_valid_slug(""));
    }
}
