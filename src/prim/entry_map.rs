// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Storage for library entries keyed by name or id, remembering the order they
//! were declared in.

use std::collections::HashMap;

/// Holds a collection of entries of the same type, each with a unique key.
/// Iteration follows first insertion order. Inserting an existing key replaces
/// its value without moving it.
#[derive(Debug)]
pub struct EntryMap<T> {
  data:         Vec<(String, T)>,
  key_to_index: HashMap<String, usize>,
}

impl<T> EntryMap<T> {
  /// Creates a new empty `EntryMap`.
  pub fn new() -> Self {
    Self {
      data:         Vec::new(),
      key_to_index: HashMap::new(),
    }
  }

  /// Finds the entry for `key`, if it exists.
  pub fn get(&self, key: &str) -> Option<&T> {
    self.key_to_index.get(key).map(|&i| &self.data[i].1)
  }

  /// Adds `value` under `key`, returning the value it replaced, if any.
  pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
    let key = key.into();

    if let Some(&i) = self.key_to_index.get(&key) {
      return Some(std::mem::replace(&mut self.data[i].1, value));
    }

    self.key_to_index.insert(key.clone(), self.data.len());
    self.data.push((key, value));
    None
  }

  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.data.iter().map(|(k, _)| k.as_str())
  }

  pub fn len(&self) -> usize {
    self.data.len()
  }

  pub fn values(&self) -> impl Iterator<Item = &T> {
    self.data.iter().map(|(_, v)| v)
  }
}

impl<T> Default for EntryMap<T> {
  fn default() -> Self {
    Self::new()
  }
}
