//! # Metafilter: Composable Metadata Filtering Engine
//!
//! Metafilter maps named metadata fields (e.g. "artist", "track") to ordered
//! chains of string filter functions and applies the right chain to a value
//! submitted for a field. It is meant to be embedded by callers that
//! normalize metadata strings before using them.
//!
//! ## Features
//!
//! - **Field-scoped filter chains**: each field owns an independent, ordered
//!   chain of filter functions
//! - **Append-only merging**: filter sets and whole registries merge without
//!   removing or reordering existing functions
//! - **Caller-supplied functions**: any `Fn(&str) -> String` works as a
//!   filter function; the engine never inspects what a function does
//! - **Stock functions and presets**: ready-made cleaners for remaster
//!   annotations, featured-artist credits, video-platform noise, and more
//!
//! ## Example
//!
//! ```
//! use metafilter::{create_filter, FilterSet};
//!
//! let mut registry = create_filter(
//!     FilterSet::new()
//!         .field("artist", |text: &str| text.to_lowercase())
//!         .field("artist", metafilter::functions::normalize_feature),
//! )?;
//!
//! assert_eq!(registry.filter_field("artist", "DJ ft. Someone")?, "dj feat. someone");
//!
//! registry.append(FilterSet::new().field("track", |text: &str| text.trim().to_string()))?;
//! assert_eq!(registry.fields(), vec!["artist".to_string(), "track".to_string()]);
//! # Ok::<(), metafilter::FilterError>(())
//! ```

// Core engine
pub mod filter_registry;

// Stock filter functions and their rule tables
pub mod functions;
pub mod rules;

// Ready-made filters for common metadata sources
pub mod presets;

// Re-export key types
pub use filter_registry::{create_filter, FilterError, FilterFn, FilterRegistry, FilterSet};

// Re-export the rule machinery for callers building custom functions
pub use rules::{apply_rules, FilterRule};
