//! Equipment classification categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed classification for equipment items.
///
/// Each category has two fixed string forms: a *wire name* (e.g.
/// `STAFF_EQUIPMENT`) written into persisted inventory files, and a
/// human-readable *label* (e.g. "Staff equipment") shown by the presentation
/// layer. The wire names are stable identifiers; parsing an unknown wire name
/// during load is a hard error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Medical equipment
    Medical,
    /// Protective equipment worn by staff
    StaffEquipment,
    /// Protective equipment issued to clients
    ClientEquipment,
    /// Maintenance and upkeep equipment
    Maintenance,
    /// Anything that fits no other category
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::Medical,
        Self::StaffEquipment,
        Self::ClientEquipment,
        Self::Maintenance,
        Self::Other,
    ];

    /// The stable identifier used in persisted files.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Medical => "MEDICAL",
            Self::StaffEquipment => "STAFF_EQUIPMENT",
            Self::ClientEquipment => "CLIENT_EQUIPMENT",
            Self::Maintenance => "MAINTENANCE",
            Self::Other => "OTHER",
        }
    }

    /// The human-readable label shown to the user.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Medical => "Medical equipment",
            Self::StaffEquipment => "Staff equipment",
            Self::ClientEquipment => "Client equipment",
            Self::Maintenance => "Maintenance equipment",
            Self::Other => "Other",
        }
    }

    /// Looks up a category by its wire name. Returns `None` for anything that
    /// is not one of the fixed identifiers.
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.wire_name() == name)
    }

    /// Looks up a category by its display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lenient parsing for user input (CLI arguments): accepts the wire name in
/// any case, with hyphens in place of underscores, or the exact label.
impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_uppercase().replace('-', "_");

        Self::from_wire_name(&normalized)
            .or_else(|| Self::from_label(trimmed))
            .ok_or_else(|| {
                let expected = Self::ALL
                    .into_iter()
                    .map(Self::wire_name)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("unknown category '{trimmed}' (expected one of: {expected})")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_wire_name(category.wire_name()), Some(category));
        }
    }

    #[test]
    fn test_from_wire_name_unknown() {
        assert_eq!(Category::from_wire_name("NOT_A_CATEGORY"), None);
        assert_eq!(Category::from_wire_name("medical"), None); // case-sensitive
        assert_eq!(Category::from_wire_name(""), None);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Category::from_label("Staff equipment"), Some(Category::StaffEquipment));
        assert_eq!(Category::from_label("staff equipment"), None); // exact match only
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::Medical.to_string(), "Medical equipment");
        assert_eq!(Category::Other.to_string(), "Other");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Category::ClientEquipment).unwrap();
        assert_eq!(json, "\"CLIENT_EQUIPMENT\"");

        let parsed: Category = serde_json::from_str("\"MAINTENANCE\"").unwrap();
        assert_eq!(parsed, Category::Maintenance);

        assert!(serde_json::from_str::<Category>("\"NOT_A_CATEGORY\"").is_err());
    }

    #[test]
    fn test_from_str_lenient() {
        assert_eq!("medical".parse::<Category>().unwrap(), Category::Medical);
        assert_eq!("STAFF_EQUIPMENT".parse::<Category>().unwrap(), Category::StaffEquipment);
        assert_eq!("staff-equipment".parse::<Category>().unwrap(), Category::StaffEquipment);
        assert_eq!("Client equipment".parse::<Category>().unwrap(), Category::ClientEquipment);
        assert!("gadgets".parse::<Category>().is_err());
    }
}
