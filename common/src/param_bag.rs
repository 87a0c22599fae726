//! Ordered multi-valued request parameters.
//!
//! Query strings may repeat a key. Scalar parameters (`page`, `q`, ...) are read with
//! [`ParamBag::last`], so the last occurrence wins; list parameters are read with
//! [`ParamBag::all`].

use std::{collections::HashSet, convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use url::form_urlencoded;


#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParamBag(pub Vec<(String, String)>);

impl ParamBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn last(&self, key: &str) -> Option<&str> {
        self.0.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0.iter().filter(move |(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Distinct keys in order of first appearance.
    pub fn keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.0
            .iter()
            .filter(|(k, _)| seen.insert(k.as_str()))
            .map(|(k, _)| k.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of the bag where `key` appears exactly once, holding `value`.
    /// The first occurrence keeps its position; a missing key is appended.
    pub fn with_value(&self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut replaced = false;
        let mut pairs = Vec::with_capacity(self.0.len() + 1);
        for (k, v) in &self.0 {
            if k != key {
                pairs.push((k.clone(), v.clone()));
            } else if !replaced {
                pairs.push((k.clone(), value.clone()));
                replaced = true;
            }
        }
        if !replaced {
            pairs.push((key.to_string(), value));
        }
        Self(pairs)
    }

    /// `base_url?<encoded pairs>`, or just `base_url` when the bag is empty.
    pub fn to_url(&self, base_url: &str) -> String {
        if self.is_empty() {
            return base_url.to_string();
        }
        format!("{}?{}", base_url, self)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl Display for ParamBag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        f.write_str(&encoded)
    }
}

// Never fails: undecodable escapes are kept as written.
impl FromStr for ParamBag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('?').unwrap_or(s);
        Ok(Self(form_urlencoded::parse(s.as_bytes()).into_owned().collect()))
    }
}
