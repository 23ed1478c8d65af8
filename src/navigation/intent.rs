use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Extra key under which the selected song travels to the song screen.
pub const SONG_EXTRA: &str = "song";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Song,
}

#[derive(Debug, Error)]
pub enum NavError {
    #[error("intent for {route:?} is missing the `{key}` extra")]
    MissingExtra { route: Route, key: String },
    #[error("failed to encode the `{key}` extra: {source}")]
    Encode {
        key: String,
        #[source]
        source: toml::ser::Error,
    },
    #[error("failed to decode the `{key}` extra: {source}")]
    Decode {
        key: String,
        #[source]
        source: toml::de::Error,
    },
}

/// A screen-transition request: a target route plus serialized extras.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Intent {
    route: Route,
    extras: BTreeMap<String, String>,
}

impl Intent {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            extras: BTreeMap::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Attach `value` under `key`, encoded as TOML text.
    pub fn put_extra<T: Serialize>(mut self, key: &str, value: &T) -> Result<Self, NavError> {
        let encoded = toml::to_string(value).map_err(|source| NavError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.extras.insert(key.to_string(), encoded);
        Ok(self)
    }

    /// Decode the extra stored under `key` into a fresh value.
    pub fn extra<T: DeserializeOwned>(&self, key: &str) -> Result<T, NavError> {
        let raw = self
            .extras
            .get(key)
            .ok_or_else(|| NavError::MissingExtra {
                route: self.route,
                key: key.to_string(),
            })?;
        toml::from_str(raw).map_err(|source| NavError::Decode {
            key: key.to_string(),
            source,
        })
    }

    /// Raw encoded payload under `key`, if any.
    #[cfg(test)]
    pub(crate) fn raw_extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn with_raw_extra(mut self, key: &str, raw: &str) -> Self {
        self.extras.insert(key.to_string(), raw.to_string());
        self
    }
}
