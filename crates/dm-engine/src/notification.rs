//! Player-facing notifications produced by transitions.

use std::fmt;

use dm_core::ItemId;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Neutral information.
    Info,
    /// Something good happened.
    Success,
    /// An action was refused.
    Error,
}

impl Severity {
    /// Lowercase label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Something the external notifier should surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A choice needs an item the player does not hold.
    MissingRequirement(ItemId),
    /// An item was added to the inventory.
    ItemAcquired(ItemId),
    /// An exit was reached without the item that opens it.
    MissingKey(ItemId),
    /// Grab was used where there is nothing to pick up.
    NothingToGrab,
}

impl Notification {
    /// Presentation severity.
    pub fn severity(&self) -> Severity {
        match self {
            Self::MissingRequirement(_) | Self::MissingKey(_) => Severity::Error,
            Self::ItemAcquired(_) => Severity::Success,
            Self::NothingToGrab => Severity::Info,
        }
    }

    /// Stable machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingRequirement(_) => "missing_requirement",
            Self::ItemAcquired(_) => "item_acquired",
            Self::MissingKey(_) => "missing_key",
            Self::NothingToGrab => "nothing_to_grab",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequirement(item) => write!(f, "You need the {item} for that."),
            Self::ItemAcquired(item) => write!(f, "You picked up the {item}."),
            Self::MissingKey(item) => write!(f, "The door is locked. You need the {item}."),
            Self::NothingToGrab => write!(f, "There is nothing here to grab."),
        }
    }
}

impl Serialize for Notification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Notification", 3)?;
        s.serialize_field("kind", self.kind())?;
        s.serialize_field("severity", self.severity().label())?;
        s.serialize_field("message", &self.to_string())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities() {
        let key = ItemId::from("key");
        assert_eq!(Notification::MissingRequirement(key.clone()).severity(), Severity::Error);
        assert_eq!(Notification::MissingKey(key.clone()).severity(), Severity::Error);
        assert_eq!(Notification::ItemAcquired(key).severity(), Severity::Success);
        assert_eq!(Notification::NothingToGrab.severity(), Severity::Info);
    }

    #[test]
    fn messages_name_the_item() {
        let n = Notification::MissingRequirement(ItemId::from("key"));
        assert_eq!(n.to_string(), "You need the key for that.");
        let n = Notification::MissingKey(ItemId::from("key"));
        assert!(n.to_string().contains("locked"));
    }
}
