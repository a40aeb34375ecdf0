//! Stock filter functions for cleaning metadata fields.
//!
//! Each function is a plain `fn(&str) -> String` and can be wired into a
//! [`FilterRegistry`](crate::FilterRegistry) like any caller-supplied filter
//! function. The engine itself does not depend on this module.

use crate::rules::{
    apply_rules, CLEAN_EXPLICIT_RULES, FEATURE_RULES, LIVE_RULES, NBSP_RULES,
    NORMALIZE_FEATURE_RULES, PARODY_RULES, REMASTERED_RULES, TRACK_SUFFIX_RULES, VERSION_RULES,
    VIDEO_TITLE_RULES, ZERO_WIDTH_RULES,
};

/// Remove zero-width characters from the text.
pub fn remove_zero_width(text: &str) -> String {
    apply_rules(text, &ZERO_WIDTH_RULES)
}

/// Replace non-breaking spaces with plain spaces.
pub fn replace_nbsp(text: &str) -> String {
    apply_rules(text, &NBSP_RULES)
}

/// Remove remaster annotations from the text.
///
/// Handles the common storefront spellings: "Track - 2011 Remaster",
/// "Track (Remastered 2011)", "Track [2011 Remaster]".
pub fn remove_remastered(text: &str) -> String {
    apply_rules(text, &REMASTERED_RULES)
}

/// Remove live-recording annotations from the end of the text.
pub fn remove_live(text: &str) -> String {
    apply_rules(text, &LIVE_RULES)
}

/// Remove "(Clean)" and "(Explicit)" content tags.
pub fn remove_clean_explicit(text: &str) -> String {
    apply_rules(text, &CLEAN_EXPLICIT_RULES)
}

/// Remove edition and version annotations from the end of the text.
pub fn remove_version(text: &str) -> String {
    apply_rules(text, &VERSION_RULES)
}

/// Remove parenthesized featured-artist credits.
pub fn remove_feature(text: &str) -> String {
    apply_rules(text, &FEATURE_RULES)
}

/// Normalize featured-artist credit spellings ("ft.", "featuring") to
/// "feat.".
pub fn normalize_feature(text: &str) -> String {
    apply_rules(text, &NORMALIZE_FEATURE_RULES)
}

/// Remove parody attributions from the text.
pub fn remove_parody(text: &str) -> String {
    apply_rules(text, &PARODY_RULES)
}

/// Remove storefront track suffixes ("(Album Version)", "(Radio Edit)").
pub fn fix_track_suffix(text: &str) -> String {
    apply_rules(text, &TRACK_SUFFIX_RULES)
}

/// Strip video-platform noise from a track title.
///
/// Removes "(Official Video)"-style tags and stray separators left behind
/// by them.
pub fn clean_video_title(text: &str) -> String {
    apply_rules(text, &VIDEO_TITLE_RULES)
}
