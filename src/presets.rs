//! Ready-made filters for common metadata sources.
//!
//! Each factory returns a [`FilterRegistry`] wired over the conventional
//! metadata fields ("track", "album", "artist", "albumArtist"). Presets are
//! ordinary registries and compose with `append` and `extend` like any
//! other.

use crate::filter_registry::{FilterRegistry, FilterSet};
use crate::functions;

/// Create a filter that strips video-platform noise from track titles.
pub fn create_video_filter() -> FilterRegistry {
    FilterRegistry::new(FilterSet::new().field("track", functions::clean_video_title))
        .expect("preset filter set is valid")
}

/// Create a filter that removes remaster annotations from track and album
/// titles.
pub fn create_remastered_filter() -> FilterRegistry {
    FilterRegistry::new(
        FilterSet::new()
            .field("track", functions::remove_remastered)
            .field("album", functions::remove_remastered),
    )
    .expect("preset filter set is valid")
}

/// Create a filter for storefront metadata.
///
/// Applies the aggressive cleanup chain to track and album titles and
/// normalizes featured-artist credits on the artist fields.
pub fn create_store_filter() -> FilterRegistry {
    FilterRegistry::new(
        FilterSet::new()
            .field("track", functions::remove_remastered)
            .field("track", functions::fix_track_suffix)
            .field("track", functions::remove_clean_explicit)
            .field("track", functions::remove_live)
            .field("track", functions::normalize_feature)
            .field("album", functions::remove_remastered)
            .field("album", functions::fix_track_suffix)
            .field("artist", functions::normalize_feature)
            .field("albumArtist", functions::normalize_feature),
    )
    .expect("preset filter set is valid")
}
