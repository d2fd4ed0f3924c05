// Copyright 2025 Katapult Rust Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Query-string filters.
//!
//! Katapult endpoints identify resources through query parameters of the
//! form `entity[field]=value` rather than path segments. Each domain type
//! that can appear in a query implements [Queryable], producing a
//! [QueryValues] filter; independent filters (a resource reference, list
//! options) are unioned with [query_values] before being encoded onto the
//! request URL.

/// An ordered key/value filter suitable for a URL query string.
///
/// Keys follow the `entity[field]` convention; insertion order is preserved
/// so encoding is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryValues {
    entries: Vec<(String, String)>,
}

impl QueryValues {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any existing entry for `key`.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        self.entries.retain(|(k, _)| *k != key);
        self.entries.push((key, value.into()));
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True when the filter carries no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of entries in the filter.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Unions another filter into this one. Keys from `other` replace
    /// entries already present under the same key.
    pub fn merge(&mut self, other: QueryValues) {
        for (k, v) in other.entries {
            self.set(k, v);
        }
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the filter as an `application/x-www-form-urlencoded` string.
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// Types that can contribute entries to a request's query filter.
pub trait Queryable {
    /// The filter entries for this value. Resource references emit at most
    /// one `entity[field]` entry; list options emit `page`/`per_page`.
    fn query_values(&self) -> QueryValues;
}

/// Absence propagates: a missing object contributes an empty filter rather
/// than a default value.
impl<T: Queryable> Queryable for Option<T> {
    fn query_values(&self) -> QueryValues {
        match self {
            None => QueryValues::new(),
            Some(v) => v.query_values(),
        }
    }
}

impl<T: Queryable + ?Sized> Queryable for &T {
    fn query_values(&self) -> QueryValues {
        (**self).query_values()
    }
}

/// Unions the filters of several independently-built parts, e.g. an
/// organization reference and the list options of a `List` call.
pub fn query_values(parts: &[&dyn Queryable]) -> QueryValues {
    let mut merged = QueryValues::new();
    for part in parts {
        merged.merge(part.query_values());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ref(&'static str);

    impl Queryable for Ref {
        fn query_values(&self) -> QueryValues {
            let mut v = QueryValues::new();
            v.set("thing[id]", self.0);
            v
        }
    }

    #[test]
    fn set_replaces() {
        let mut v = QueryValues::new();
        v.set("page", "1");
        v.set("page", "2");
        assert_eq!(v.len(), 1);
        assert_eq!(v.get("page"), Some("2"));
    }

    #[test]
    fn encode_preserves_order() {
        let mut v = QueryValues::new();
        v.set("thing[id]", "thing_123");
        v.set("page", "2");
        assert_eq!(v.encode(), "thing%5Bid%5D=thing_123&page=2");
    }

    #[test]
    fn merge_unions() {
        let mut a = QueryValues::new();
        a.set("thing[id]", "thing_123");
        let mut b = QueryValues::new();
        b.set("page", "1");
        a.merge(b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn option_absence_is_empty() {
        let absent: Option<Ref> = None;
        assert!(absent.query_values().is_empty());
        let present = Some(Ref("thing_123"));
        assert_eq!(present.query_values().get("thing[id]"), Some("thing_123"));
    }

    #[test]
    fn union_helper() {
        let r = Ref("thing_123");
        let absent: Option<Ref> = None;
        let v = query_values(&[&r, &absent]);
        assert_eq!(v.len(), 1);
        assert_eq!(v.get("thing[id]"), Some("thing_123"));
    }
}
