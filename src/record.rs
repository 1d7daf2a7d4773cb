use crate::StoreError;
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use std::fmt::Debug;

/// A catalog entry kind that a [`crate::RecordStore`] can hold.
///
/// Records have no identity beyond their fields; `key` is the human-facing
/// lookup name used by the list widgets, and is not guaranteed unique.
pub trait Record: Serialize + DeserializeOwned + Clone + PartialEq + Debug {
    /// Singular noun used in messages and logs ("category", "item").
    const KIND: &'static str;

    fn key(&self) -> &str;

    /// Called right before the record is appended to `existing`. An error keeps the
    /// record out of the list.
    fn prepare_append(&mut self, _existing: &[Self]) -> Result<(), StoreError> {
        Ok(())
    }

    /// Overwrite the mutable fields with those of `values`, keeping any
    /// store-assigned identity.
    fn overwrite_with(&mut self, values: Self);
}

/// Decode an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
}

impl Record for Category {
    const KIND: &'static str = "category";

    fn key(&self) -> &str {
        &self.name
    }

    fn overwrite_with(&mut self, values: Self) {
        *self = values;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub picture: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
}

impl Item {
    /// `max(existing ids) + 1`, or `1` for an empty list. `None` once the largest id
    /// is `i64::MAX`; ids never wrap around.
    pub fn next_id(existing: &[Item]) -> Option<i64> {
        match existing.iter().map(|i| i.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }
}

impl Record for Item {
    const KIND: &'static str = "item";

    fn key(&self) -> &str {
        &self.name
    }

    fn prepare_append(&mut self, existing: &[Self]) -> Result<(), StoreError> {
        self.id = Item::next_id(existing).ok_or(StoreError::IdExhausted { kind: Self::KIND })?;
        Ok(())
    }

    fn overwrite_with(&mut self, values: Self) {
        let id = self.id;
        *self = values;
        self.id = id;
    }
}
