//! Regex rule tables for the stock filter functions.
//!
//! A rule pairs a compiled pattern with its replacement. Rule tables are
//! applied first to last with replace-all semantics; table order matters
//! where patterns overlap.

use std::sync::LazyLock;

use regex::Regex;

/// A single find-and-replace rule.
pub struct FilterRule {
    /// Pattern to search for
    pub source: Regex,
    /// Replacement text
    pub target: &'static str,
}

fn rule(pattern: &str, target: &'static str) -> FilterRule {
    FilterRule {
        source: Regex::new(pattern).expect("filter rule pattern must compile"),
        target,
    }
}

/// Apply an ordered slice of rules to the given text.
///
/// Each rule replaces every match of its pattern before the next rule runs.
pub fn apply_rules(text: &str, rules: &[FilterRule]) -> String {
    let mut filtered = text.to_string();
    for rule in rules {
        filtered = rule.source.replace_all(&filtered, rule.target).into_owned();
    }
    filtered
}

// Character cleanup

/// Zero-width characters that leak into titles from rich-text sources.
pub static ZERO_WIDTH_RULES: LazyLock<Vec<FilterRule>> =
    LazyLock::new(|| vec![rule(r"[\x{200B}-\x{200D}\x{FEFF}]", "")]);

/// Non-breaking spaces replaced by plain spaces.
pub static NBSP_RULES: LazyLock<Vec<FilterRule>> =
    LazyLock::new(|| vec![rule(r"\x{A0}", " ")]);

// Suffix and annotation cleanup

/// Remaster annotations: "Track - 2011 Remaster", "Track (Remastered 2011)",
/// "Track [2011 Remaster]".
pub static REMASTERED_RULES: LazyLock<Vec<FilterRule>> = LazyLock::new(|| {
    vec![
        rule(r"(?i)\s*[(\[][^()\[\]]*remaster[^()\[\]]*[)\]]", ""),
        rule(r"(?i)\s*[-–]\s*(\d{4}\s+)?remaster(ed)?(\s+\d{4})?$", ""),
    ]
});

/// Live-recording annotations at the end of a title.
pub static LIVE_RULES: LazyLock<Vec<FilterRule>> = LazyLock::new(|| {
    vec![
        rule(r"(?i)\s*[(\[]live( (at|in|from) [^()\[\]]*)?[)\]]$", ""),
        rule(r"(?i)\s*[-–]\s*live( (at|in|from) .*)?$", ""),
    ]
});

/// "(Clean)" / "(Explicit)" content tags.
pub static CLEAN_EXPLICIT_RULES: LazyLock<Vec<FilterRule>> = LazyLock::new(|| {
    vec![
        rule(r"(?i)\s*[(\[](clean|explicit)( version)?[)\]]", ""),
        rule(r"(?i)\s*[-–]\s*(clean|explicit)( version)?$", ""),
    ]
});

/// Parenthesized featured-artist credits.
pub static FEATURE_RULES: LazyLock<Vec<FilterRule>> = LazyLock::new(|| {
    vec![rule(r"(?i)\s*[(\[](featuring|feat|ft)\.?\s[^()\[\]]*[)\]]", "")]
});

/// Featured-artist credit spellings normalized to "feat.".
pub static NORMALIZE_FEATURE_RULES: LazyLock<Vec<FilterRule>> =
    LazyLock::new(|| vec![rule(r"(?i)\s+(featuring|ft\.?)\s+", " feat. ")]);

/// Edition and version annotations at the end of a title.
pub static VERSION_RULES: LazyLock<Vec<FilterRule>> = LazyLock::new(|| {
    vec![
        rule(r"(?i)\s*[(\[][^()\[\]]*(version|edition)[)\]]$", ""),
        rule(r"(?i)\s*[-–]\s*[^-–]*(version|edition)$", ""),
    ]
});

/// Parody attributions ("(Parody of ... by ...)").
pub static PARODY_RULES: LazyLock<Vec<FilterRule>> =
    LazyLock::new(|| vec![rule(r"(?i)\s*[(\[]parody of[^()\[\]]*[)\]]", "")]);

/// Storefront track suffixes: "(Album Version)", "(Radio Edit)",
/// "- Original Mix".
pub static TRACK_SUFFIX_RULES: LazyLock<Vec<FilterRule>> = LazyLock::new(|| {
    vec![
        rule(r"(?i)\s*[(\[](album|lp|single|radio|original) (version|edit|mix)[)\]]$", ""),
        rule(r"(?i)\s*[-–]\s*(album|lp|single|radio|original) (version|edit|mix)$", ""),
    ]
});

// Video platforms

/// Video-platform title noise: "(Official Video)", "[Official Music Video]",
/// "(Lyric Video)", "[HD]", stray leading and trailing separators.
pub static VIDEO_TITLE_RULES: LazyLock<Vec<FilterRule>> = LazyLock::new(|| {
    vec![
        rule(
            r"(?i)\s*[(\[][^()\[\]]*(official|lyric)s?\s+(music\s+)?(video|audio|visualizer)[^()\[\]]*[)\]]",
            "",
        ),
        rule(
            r"(?i)\s*[(\[](official|audio|video|visualizer|lyrics?|hd|hq|4k|1080p)[)\]]",
            "",
        ),
        rule(r"(?i)\s*[(\[]with lyrics[)\]]", ""),
        rule(r"^[\s/|·–-]+", ""),
        rule(r"[\s/|·–-]+$", ""),
        rule(r"\s{2,}", " "),
    ]
});
