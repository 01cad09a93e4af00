//! The request parameter set.
//!
//! [`ParameterSet`] holds the query parameters of one request. Keys are unique
//! and kept in byte order, so iteration, signing and serialization all see the
//! same ordering no matter how the parameters were inserted.

use std::collections::BTreeMap;

use crate::canonical::build_canonical_query_string;

/// Query parameters for a single request, keyed by parameter name.
///
/// # Examples
///
/// ```
/// use ruststs_auth::ParameterSet;
///
/// let mut params = ParameterSet::new();
/// params.insert("DurationSeconds", "900");
/// params.insert("Action", "GetFederationToken");
///
/// assert_eq!(
///     params.to_query_string(),
///     "Action=GetFederationToken&DurationSeconds=900"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    params: BTreeMap<String, String>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Insert a list-valued parameter as `label.1`, `label.2`, ...
    ///
    /// # Examples
    ///
    /// ```
    /// use ruststs_auth::ParameterSet;
    ///
    /// let mut params = ParameterSet::new();
    /// params.insert_list("Tags.member", ["a", "b"]);
    /// assert_eq!(params.get("Tags.member.1"), Some("a"));
    /// assert_eq!(params.get("Tags.member.2"), Some("b"));
    /// ```
    pub fn insert_list<I, V>(&mut self, label: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        for (i, value) in values.into_iter().enumerate() {
            self.params.insert(format!("{label}.{}", i + 1), value.into());
        }
    }

    /// Remove a parameter, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    /// Look up a parameter value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Whether the set contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render the percent-encoded, sorted query string.
    ///
    /// This is the exact rendering the signer signs over, so a query string
    /// produced after signing carries the same ordering the signature covers.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        build_canonical_query_string(self.iter())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ParameterSet {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
