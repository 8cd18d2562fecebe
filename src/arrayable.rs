/// A countable, keyed container that can flatten itself into plain pairs.
///
/// Any type exposing an ordered set of key→value entries can implement this
/// contract, and callers that only know the contract can use implementations
/// interchangeably. `keys()` and `values()` are aligned: the value at index
/// `i` of `values()` is stored under the key at index `i` of `keys()`.
///
/// [`Package`](crate::Package) implements `Arrayable` for any cloneable value
/// type.
///
/// # Examples
///
/// ```rust
/// use packmap::{Arrayable, Package};
///
/// fn entry_count<C: Arrayable>(container: &C) -> usize {
///     container.count()
/// }
///
/// let mut pkg = Package::new();
/// pkg.pack("a", 1);
/// pkg.pack("b", 2);
///
/// assert_eq!(entry_count(&pkg), 2);
/// ```
pub trait Arrayable {
    /// The key type of the container
    type Key;
    /// The value type of the container
    type Value;

    /// Returns all keys, in iteration order
    fn keys(&self) -> Vec<Self::Key>;

    /// Returns all values, in iteration order, aligned with `keys()`
    fn values(&self) -> Vec<Self::Value>;

    /// Returns the entries as an owned list of pairs, in iteration order
    fn to_array(&self) -> Vec<(Self::Key, Self::Value)>;

    /// Returns the number of entries
    fn count(&self) -> usize;

    /// Returns true if the container holds zero entries
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
