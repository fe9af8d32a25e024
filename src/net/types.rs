//! Wire DTOs for the activities REST API.
//!
//! DESIGN
//! ======
//! The catalog keeps the backend's key order so cards and select options come
//! out in the same order the server listed them. Failure bodies are decoded
//! leniently: anything that is not a plain string is treated as missing so the
//! caller falls back to its generic message.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One activity as returned by `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Not clamped: an over-filled activity goes negative.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - i64::try_from(self.participants.len()).unwrap_or(i64::MAX)
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Every activity keyed by name, in the order the backend sent them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.entries.iter_mut().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    /// Activity names in catalog order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }
}

impl FromIterator<(String, Activity)> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut catalog = Self::default();
        for (name, activity) in iter {
            // A repeated key replaces the earlier value in place, like a JSON object.
            if let Some(existing) = catalog.get_mut(&name) {
                *existing = activity;
            } else {
                catalog.entries.push((name, activity));
            }
        }
        catalog
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    entries.push((name, activity));
                }
                Ok(entries.into_iter().collect())
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Success body of `POST /activities/{name}/signup`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SignupAck {
    #[serde(default)]
    pub message: String,
}

/// Failure body of the mutation endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "deserialize_text_or_none")]
    pub detail: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_or_none")]
    pub message: Option<String>,
}

/// Accept a non-empty JSON string; anything else (arrays, objects, numbers,
/// empty strings) reads as absent.
fn deserialize_text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Values submitted from the signup form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub activity: String,
}

/// The participant a removal control is bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoveTarget {
    pub activity: String,
    pub email: String,
}
