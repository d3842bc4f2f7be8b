//! Where raw field values come from

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

/// Read-only lookup of raw values by field name.
///
/// A missing key and a JSON `null` are both treated as absent by the
/// validator. Implementations must be `Sync` to be shared with parallel
/// workers.
pub trait DataSource {
    fn get_raw(&self, name: &str) -> Option<&Value>;
}

impl DataSource for Map<String, Value> {
    fn get_raw(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

/// Only JSON objects carry fields; every other value is empty.
impl DataSource for Value {
    fn get_raw(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(name))
    }
}

impl<S: BuildHasher> DataSource for HashMap<String, Value, S> {
    fn get_raw(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl DataSource for BTreeMap<String, Value> {
    fn get_raw(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn get_raw(&self, name: &str) -> Option<&Value> {
        (**self).get_raw(name)
    }
}
