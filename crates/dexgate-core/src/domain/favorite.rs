use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::UtcDateTime;

/// Identity selecting a favorites collection.
///
/// Absent or blank identities collapse onto the shared `"default"` caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(String);

impl CallerId {
    pub const DEFAULT: &'static str = "default";

    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::default()
        } else {
            Self(value)
        }
    }

    /// Resolves the identity token supplied out-of-band by the transport.
    pub fn from_token(token: Option<&str>) -> Self {
        token.map_or_else(Self::default, Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CallerId {
    fn default() -> Self {
        Self(String::from(Self::DEFAULT))
    }
}

impl Display for CallerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A creature marked by one caller. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub id: u32,
    /// Name as supplied when the favorite was added.
    pub name: String,
    pub added_at: UtcDateTime,
}

impl FavoriteEntry {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            added_at: UtcDateTime::now(),
        }
    }
}
