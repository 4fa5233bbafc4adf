//! Small list and string helpers.

/// Splits `items` into chunks of at most `size` elements, preserving order.
///
/// A `size` of zero is treated as one chunk holding everything.
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 || items.len() <= size {
        return vec![items.to_vec()];
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Normalizes a family name for use in paths and references: lowercase,
/// spaces removed.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "")
}
