pub mod store;

/// A sink for operation records.
///
/// Records are opaque, immutable strings kept in insertion order.
/// Implementations are not required to be thread-safe.
pub trait History {
    /// Appends a record.
    fn add_entry(&mut self, entry: String);

    /// Returns up to `count` of the most recent records, oldest first.
    ///
    /// Asking for more records than exist returns all of them; this never
    /// fails, whatever `count` is.
    fn last_operations(&self, count: usize) -> Vec<String>;
}
