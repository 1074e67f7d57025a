//! Common traits shared by all aggregates

/// Static metadata for an aggregate type.
///
/// Gives every aggregate a stable index, the API path segment it lives under,
/// and the labels the UI uses for single records and lists.
pub trait AggregateRoot {
    /// Aggregate index within the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// API path segment (e.g. "account" for `/account/...` endpoints)
    fn collection_name() -> &'static str;

    /// UI label for a single record (e.g. "Company")
    fn element_name() -> &'static str;

    /// UI label for the list page (e.g. "Companies")
    fn list_name() -> &'static str;
}
