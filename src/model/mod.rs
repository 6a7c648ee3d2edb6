//! Document model types for mind-map content.
//!
//! This module defines the typed representation of the `content.json`
//! document found inside a mind-map archive: an ordered list of sheets,
//! each owning one root topic tree.

mod document;
mod topic;

pub use document::{Document, Sheet};
pub use topic::{Children, Topic};

use serde::{Deserialize, Deserializer};

/// Deserialize a value, treating JSON `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
