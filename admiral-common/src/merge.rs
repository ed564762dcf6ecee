//! Merge combinators for descriptor buckets.
//!
//! Two deliberately separate policies:
//! - `merge_by_key`: name-keyed registries, incoming keys win, others survive
//! - `replace_whole`: presentation singletons, incoming value supersedes all
//!
//! There is no generic deep merge. Nested payloads are never merged
//! recursively; a colliding key takes the incoming value verbatim.

use indexmap::IndexMap;

use crate::component::Options;

/// A flat, insertion-ordered, name-keyed bucket.
pub type Registry<T> = IndexMap<String, T>;

/// Shallow-merge `overlay` into `base`, returning the combined map.
///
/// Keys present in both take the overlay value but keep their original
/// position; new keys append in overlay order.
pub fn merge_by_key<T>(mut base: Registry<T>, overlay: Registry<T>) -> Registry<T> {
    for (key, value) in overlay {
        if base.contains_key(&key) {
            tracing::trace!(%key, "registry key overridden");
        }
        base.insert(key, value);
    }
    base
}

/// Replace a singleton wholesale. The previous value is discarded.
pub fn replace_whole<T>(_base: T, overlay: T) -> T {
    overlay
}

/// Shallow union of two option payloads, overlay keys winning.
pub fn merge_options(mut base: Options, overlay: Options) -> Options {
    for (key, value) in overlay {
        base.insert(key, value);
    }
    base
}
