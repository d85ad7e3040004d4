//! A named, type-erased value store.
//!
//! Keys map to runtime-tagged [`Value`]s; the concrete type of an entry is
//! whatever was last inserted under its key. Checks and declarations only
//! ever borrow a store for the duration of a call.

use std::collections::HashMap;
use std::hash::BuildHasherDefault;

use seahash::SeaHasher;
use tracing::trace;

use crate::datatype::{DataType, Value};
use crate::error::StoreError;
use crate::printer::ValuePrinter;

// ------------- Key -------------
pub type Key = String;

pub type KeyHasher = BuildHasherDefault<SeaHasher>;

/// The capability contract a store must satisfy for validation.
///
/// Any concrete store implementing this trait may be substituted; the
/// engine is polymorphic over the store, not tied to [`ParameterStore`].
pub trait ValueStore {
    /// True iff the key has a stored value.
    fn contains(&self, key: &str) -> bool;
    /// Stores or overwrites a value under the key and returns a handle to
    /// the stored value. Re-insertion may change the entry's concrete type.
    fn insert<T: DataType>(&mut self, key: impl Into<Key>, value: T) -> &Value;
    /// The stored value read as `T`.
    ///
    /// Fails with [`StoreError::KeyNotFound`] if the key is absent and with
    /// [`StoreError::TypeMismatch`] if the stored concrete type differs.
    fn get<T: DataType>(&self, key: &str) -> Result<&T, StoreError>;
    /// The type-erased payload; fails with [`StoreError::KeyNotFound`] if absent.
    fn data(&self, key: &str) -> Result<&Value, StoreError>;
    /// Removes all entries.
    fn clear(&mut self);
}

// ------------- ParameterStore -------------
/// The reference store, keyed by strings.
#[derive(Debug, Default)]
pub struct ParameterStore {
    kept: HashMap<Key, Value, KeyHasher>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self {
            kept: HashMap::default(),
        }
    }
    pub fn len(&self) -> usize {
        self.kept.len()
    }
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.kept.iter().map(|(key, value)| (key.as_str(), value))
    }
    /// Renders every entry through the printer, one `key: value` line per
    /// entry. Diagnostic only; never part of the validation path.
    pub fn print(&self, printer: &ValuePrinter) -> Result<String, StoreError> {
        let mut out = String::new();
        for (key, value) in &self.kept {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&printer.render(value)?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl ValueStore for ParameterStore {
    fn contains(&self, key: &str) -> bool {
        self.kept.contains_key(key)
    }
    fn insert<T: DataType>(&mut self, key: impl Into<Key>, value: T) -> &Value {
        let key = key.into();
        trace!(key = %key, data_type = T::DATA_TYPE, "insert");
        self.kept.insert(key.clone(), value.wrap());
        &self.kept[&key]
    }
    fn get<T: DataType>(&self, key: &str) -> Result<&T, StoreError> {
        let value = self.data(key)?;
        T::peel(value).ok_or_else(|| StoreError::TypeMismatch {
            key: key.to_owned(),
            expected: T::DATA_TYPE,
            actual: value.data_type(),
        })
    }
    fn data(&self, key: &str) -> Result<&Value, StoreError> {
        self.kept.get(key).ok_or_else(|| StoreError::KeyNotFound {
            key: key.to_owned(),
        })
    }
    fn clear(&mut self) {
        trace!("clear");
        self.kept.clear();
    }
}
