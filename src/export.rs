//! Export modes and the defaults-style deep merge behind process
//! serialization.
//!
//! A process exports its step data in one of two shapes: a map keyed by
//! step id, or a single accumulator that every step's data is deep-merged
//! into. The merge fills missing paths only; values already present in the
//! accumulator are never overwritten, so the wrapper and earlier steps take
//! precedence over later ones.

use serde_json::{Map, Value};

/// How [`Process::to_object`](crate::Process::to_object) folds step data
/// into the output map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    /// One top-level entry per step, keyed by step id.
    #[default]
    Keyed,

    /// Deep-merge every step's data into a single map, first writer wins
    /// per path.
    Merged,
}

/// Fill missing paths in `target` with values from `source`.
///
/// When both sides hold an object under the same key the merge recurses;
/// any other existing value is left untouched. Keys absent from `target`
/// are copied whole, arrays and scalars included.
pub(crate) fn merge_defaults(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, incoming) in source {
        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), incoming.clone());
            }
            Some(Value::Object(existing)) => {
                if let Value::Object(incoming) = incoming {
                    merge_defaults(existing, incoming);
                }
            }
            Some(_) => {}
        }
    }
}
