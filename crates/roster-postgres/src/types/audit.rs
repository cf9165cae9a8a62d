//! Audit actor identity for mutating operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity recorded in `created_by`/`updated_by`/`deleted_by` columns.
///
/// Every mutating repository call takes an explicit actor instead of a
/// hardcoded system constant, so the audit trail always names the caller
/// the upstream authentication layer resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Actor(String);

impl Actor {
    /// Fallback actor for requests without an authenticated identity.
    pub const ANONYMOUS: &'static str = "anonymous";

    /// Creates a new actor, trimming whitespace and falling back to
    /// [`Actor::ANONYMOUS`] for empty names.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            Self(Self::ANONYMOUS.to_owned())
        } else {
            Self(name.to_owned())
        }
    }

    /// Returns the anonymous actor.
    pub fn anonymous() -> Self {
        Self(Self::ANONYMOUS.to_owned())
    }

    /// Returns the actor name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Actor {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for Actor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_names_fall_back_to_anonymous() {
        assert_eq!(Actor::new("").name(), Actor::ANONYMOUS);
        assert_eq!(Actor::new("   ").name(), Actor::ANONYMOUS);
        assert_eq!(Actor::new(" hr-admin ").name(), "hr-admin");
    }
}
