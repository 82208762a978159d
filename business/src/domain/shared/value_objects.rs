use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies one browsing session.
/// Carts are isolated per session and per restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Starts a fresh session.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a session id received from a client. Only UUIDs are accepted so
    /// that a session id can never smuggle separators into a storage key.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a restaurant as issued by the restaurant API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantId(String);

impl RestaurantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RestaurantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RestaurantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier of a menu item. The same type is used by the menu, the cart and
/// the checkout payload, so lookups always compare like with like.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(String);

impl MenuItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MenuItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MenuItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
