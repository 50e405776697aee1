/// Result of reading a single key.
///
/// `Placeholder` means the store was asked recently and had no row, so the
/// caller must not ask it again until the placeholder expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup<T> {
    Hit(T),
    Miss,
    Placeholder,
}
