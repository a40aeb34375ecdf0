//! Filter registry for field-scoped string transformations.
//!
//! This module provides the engine that maps metadata fields (e.g. "artist",
//! "track") to ordered chains of filter functions and applies the right chain
//! to a value submitted for a field.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Error type for filter registry operations
#[derive(Debug, Clone)]
pub enum FilterError {
    /// A filter set supplied an empty function chain for a field.
    InvalidFilterSet(String),
    /// A field that no filter chain is configured for.
    InvalidField(String),
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidFilterSet(field) => {
                write!(f, "Invalid filter set: no filter functions for field '{}'", field)
            }
            FilterError::InvalidField(field) => write!(f, "Invalid filter field: {}", field),
        }
    }
}

impl std::error::Error for FilterError {}

/// Trait for filter functions
///
/// A filter function is a pure function which takes a non-empty string and
/// returns a modified string. The registry never inspects what a function
/// does to its input, only threads values through the configured chains.
pub trait FilterFn: Send + Sync {
    /// Apply the filter to the given text
    fn apply(&self, text: &str) -> String;
}

/// Simple function-based implementation of FilterFn
impl<F> FilterFn for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn apply(&self, text: &str) -> String {
        self(text)
    }
}

/// A set of filters used as input to registry construction and merging.
///
/// Maps field names to ordered chains of filter functions. Each field can
/// hold a single filter function or a whole chain; a single function is
/// normalized to a one-element chain on insertion.
///
/// # Example
///
/// ```
/// use metafilter::FilterSet;
///
/// let set = FilterSet::new()
///     .field("track", |text: &str| text.trim().to_string())
///     .field("track", |text: &str| text.to_lowercase());
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Default, Clone)]
pub struct FilterSet {
    fields: IndexMap<String, Vec<Arc<dyn FilterFn>>>,
}

impl FilterSet {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Add a single filter function for a field.
    ///
    /// Calling this repeatedly for the same field builds up a chain in call
    /// order.
    pub fn field(mut self, name: impl Into<String>, filter: impl FilterFn + 'static) -> Self {
        self.fields
            .entry(name.into())
            .or_default()
            .push(Arc::new(filter));
        self
    }

    /// Add an ordered chain of filter functions for a field.
    ///
    /// The chain is appended verbatim after any functions already present
    /// for the field. An empty chain is kept as-is and rejected when the set
    /// reaches a registry.
    pub fn field_chain(
        mut self,
        name: impl Into<String>,
        filters: Vec<Arc<dyn FilterFn>>,
    ) -> Self {
        self.fields.entry(name.into()).or_default().extend(filters);
        self
    }

    /// Get the number of fields in the set.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the set contains no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn into_fields(self) -> IndexMap<String, Vec<Arc<dyn FilterFn>>> {
        self.fields
    }

    pub(crate) fn fields(&self) -> &IndexMap<String, Vec<Arc<dyn FilterFn>>> {
        &self.fields
    }
}

/// Create a new FilterRegistry instance from a given filter set.
///
/// # Errors
///
/// Returns `FilterError::InvalidFilterSet` if any field of the set maps to
/// an empty filter chain.
pub fn create_filter(filter_set: FilterSet) -> Result<FilterRegistry, FilterError> {
    FilterRegistry::new(filter_set)
}

/// Registry that filters metadata fields by a merged filter set.
///
/// The registry owns a mapping from field name to an ordered chain of filter
/// functions. Merging is append-only: functions already configured for a
/// field are never removed or reordered, new ones are added after them.
///
/// # Example
///
/// ```
/// use metafilter::{create_filter, FilterSet};
///
/// let registry = create_filter(
///     FilterSet::new().field("title", |text: &str| text.trim().to_string()),
/// )?;
///
/// assert_eq!(registry.filter_field("title", "  abc  ")?, "abc");
/// # Ok::<(), metafilter::FilterError>(())
/// ```
pub struct FilterRegistry {
    /// Merged filters: field name -> ordered filter chain
    merged_filter_set: IndexMap<String, Vec<Arc<dyn FilterFn>>>,
}

impl FilterRegistry {
    /// Create a new registry from a filter set.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidFilterSet` if any field of the set maps
    /// to an empty filter chain.
    pub fn new(filter_set: FilterSet) -> Result<Self, FilterError> {
        let mut registry = Self {
            merged_filter_set: IndexMap::new(),
        };
        registry.append(filter_set)?;
        Ok(registry)
    }

    /// Filter a field value using the filters configured for the field.
    ///
    /// An empty value is returned unchanged without invoking any filter
    /// function. Otherwise the value is passed through the field's chain in
    /// order, each function receiving the previous function's output.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidField` if no filters are configured for
    /// the field.
    pub fn filter_field(&self, field: &str, field_value: &str) -> Result<String, FilterError> {
        let filters = self
            .merged_filter_set
            .get(field)
            .ok_or_else(|| FilterError::InvalidField(field.to_string()))?;

        Ok(filter_text(field_value, filters))
    }

    /// Append a new filter set.
    ///
    /// For each field in the incoming set the filter chain is concatenated
    /// after the chain already configured for that field, creating the field
    /// if absent. The whole set is validated before any field is merged, so
    /// a rejected set leaves the registry untouched.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidFilterSet` if any field of the set maps
    /// to an empty filter chain.
    pub fn append(&mut self, filter_set: FilterSet) -> Result<&mut Self, FilterError> {
        for (field, filters) in filter_set.fields() {
            if filters.is_empty() {
                return Err(FilterError::InvalidFilterSet(field.clone()));
            }
        }

        for (field, filters) in filter_set.into_fields() {
            tracing::debug!("appending {} filter(s) for field '{}'", filters.len(), field);
            self.merged_filter_set
                .entry(field)
                .or_default()
                .extend(filters);
        }

        Ok(self)
    }

    /// Extend the registry by the filter set of another registry.
    ///
    /// Merges `other`'s entire field mapping into this registry under the
    /// same ordering rule as [`append`](Self::append). The other registry is
    /// left unmodified; the filter functions are shared, not copied.
    pub fn extend(&mut self, other: &FilterRegistry) -> &mut Self {
        for (field, filters) in &other.merged_filter_set {
            tracing::debug!("extending field '{}' with {} filter(s)", field, filters.len());
            self.merged_filter_set
                .entry(field.clone())
                .or_default()
                .extend(filters.iter().cloned());
        }
        self
    }

    /// Check if the registry contains filter functions for a given field.
    pub fn can_filter_field(&self, field: &str) -> bool {
        self.merged_filter_set.contains_key(field)
    }

    /// Get the list of fields the registry can filter, in insertion order.
    pub fn fields(&self) -> Vec<String> {
        self.merged_filter_set.keys().cloned().collect()
    }
}

impl fmt::Debug for FilterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // filter functions are opaque, so show field names and chain lengths
        f.debug_map()
            .entries(
                self.merged_filter_set
                    .iter()
                    .map(|(field, filters)| (field, filters.len())),
            )
            .finish()
    }
}

/// Thread text through an ordered filter chain.
fn filter_text(text: &str, filters: &[Arc<dyn FilterFn>]) -> String {
    if text.is_empty() {
        return text.to_string();
    }

    tracing::trace!("applying {} filter(s)", filters.len());

    let mut filtered = text.to_string();
    for filter in filters {
        filtered = filter.apply(&filtered);
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trim(text: &str) -> String {
        text.trim().to_string()
    }

    fn lowercase(text: &str) -> String {
        text.to_lowercase()
    }

    fn exclaim(text: &str) -> String {
        format!("{}!", text)
    }

    #[test]
    fn test_create_and_filter_single_function() {
        let registry = create_filter(FilterSet::new().field("title", trim)).unwrap();

        assert_eq!(registry.filter_field("title", "  abc  ").unwrap(), "abc");
    }

    #[test]
    fn test_filter_chain_applies_in_order() {
        let registry = create_filter(
            FilterSet::new()
                .field("artist", lowercase)
                .field("artist", |text: &str| text.replace("ft.", "feat.")),
        )
        .unwrap();

        assert_eq!(
            registry.filter_field("artist", "DJ ft. Someone").unwrap(),
            "dj feat. someone"
        );
    }

    #[test]
    fn test_chain_order_is_left_to_right() {
        let registry = create_filter(
            FilterSet::new()
                .field("track", |text: &str| format!("[{}]", text))
                .field("track", exclaim),
        )
        .unwrap();

        assert_eq!(registry.filter_field("track", "abc").unwrap(), "[abc]!");
    }

    #[test]
    fn test_empty_value_is_returned_unchanged() {
        let panicking = |_text: &str| -> String { panic!("filter must not run on empty input") };
        let registry = create_filter(FilterSet::new().field("track", panicking)).unwrap();

        assert_eq!(registry.filter_field("track", "").unwrap(), "");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let registry = create_filter(FilterSet::new().field("track", trim)).unwrap();

        let result = registry.filter_field("album", "anything");
        assert!(matches!(result, Err(FilterError::InvalidField(field)) if field == "album"));
    }

    #[test]
    fn test_unknown_field_error_display() {
        let err = FilterError::InvalidField("album".to_string());
        assert_eq!(err.to_string(), "Invalid filter field: album");
    }

    #[test]
    fn test_empty_chain_is_rejected() {
        let result = create_filter(FilterSet::new().field_chain("track", Vec::new()));

        assert!(matches!(
            result,
            Err(FilterError::InvalidFilterSet(field)) if field == "track"
        ));
    }

    #[test]
    fn test_empty_set_creates_registry_with_no_fields() {
        let registry = create_filter(FilterSet::new()).unwrap();

        assert!(registry.fields().is_empty());
        assert!(!registry.can_filter_field("track"));
    }

    #[test]
    fn test_can_filter_field_after_construction() {
        let registry =
            create_filter(FilterSet::new().field("a", trim).field("b", lowercase)).unwrap();

        assert!(registry.can_filter_field("a"));
        assert!(registry.can_filter_field("b"));
        assert!(!registry.can_filter_field("c"));
    }

    #[test]
    fn test_fields_lists_unique_names_in_insertion_order() {
        let registry = create_filter(
            FilterSet::new()
                .field("b", trim)
                .field("a", trim)
                .field("b", lowercase),
        )
        .unwrap();

        assert_eq!(registry.fields(), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_append_adds_after_existing_functions() {
        let mut registry = create_filter(FilterSet::new().field("track", exclaim)).unwrap();
        registry
            .append(FilterSet::new().field("track", |text: &str| format!("({})", text)))
            .unwrap();

        // exclaim ran first, the appended wrapper second
        assert_eq!(registry.filter_field("track", "abc").unwrap(), "(abc!)");
    }

    #[test]
    fn test_append_creates_missing_fields() {
        let mut registry = create_filter(FilterSet::new().field("track", trim)).unwrap();
        registry
            .append(FilterSet::new().field("album", lowercase))
            .unwrap();

        assert!(registry.can_filter_field("album"));
        assert_eq!(registry.filter_field("album", "ABC").unwrap(), "abc");
    }

    #[test]
    fn test_append_supports_fluent_chaining() {
        let mut registry = create_filter(FilterSet::new().field("track", trim)).unwrap();
        registry
            .append(FilterSet::new().field("album", trim))
            .unwrap()
            .append(FilterSet::new().field("artist", trim))
            .unwrap();

        assert_eq!(registry.fields().len(), 3);
    }

    #[test]
    fn test_rejected_append_leaves_registry_untouched() {
        let mut registry = create_filter(FilterSet::new().field("track", exclaim)).unwrap();

        let result = registry.append(
            FilterSet::new()
                .field("track", trim)
                .field_chain("album", Vec::new()),
        );

        assert!(result.is_err());
        assert!(!registry.can_filter_field("album"));
        // the valid field of the rejected set was not merged either
        assert_eq!(registry.filter_field("track", "abc").unwrap(), "abc!");
    }

    #[test]
    fn test_extend_merges_other_registry() {
        let mut registry = create_filter(FilterSet::new().field("track", exclaim)).unwrap();
        let other = create_filter(
            FilterSet::new()
                .field("track", lowercase)
                .field("album", trim),
        )
        .unwrap();

        registry.extend(&other);

        assert_eq!(registry.filter_field("track", "ABC").unwrap(), "abc!");
        assert!(registry.can_filter_field("album"));
    }

    #[test]
    fn test_extend_leaves_other_registry_intact() {
        let mut registry = create_filter(FilterSet::new().field("track", exclaim)).unwrap();
        let other = create_filter(FilterSet::new().field("track", lowercase)).unwrap();

        registry.extend(&other);

        assert_eq!(other.fields(), vec!["track".to_string()]);
        assert_eq!(other.filter_field("track", "ABC").unwrap(), "abc");
    }

    #[test]
    fn test_closures_capture_state() {
        let suffix = " (clean)".to_string();
        let registry = create_filter(
            FilterSet::new().field("track", move |text: &str| format!("{}{}", text, suffix)),
        )
        .unwrap();

        assert_eq!(registry.filter_field("track", "abc").unwrap(), "abc (clean)");
    }
}
