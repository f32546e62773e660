//! Expense categories
//!
//! New records must use one of the five known categories. Names read back
//! from disk that match none of them are kept verbatim as `Unrecognized`
//! so a hand-edited or drifted file still loads and summarizes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Category of an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transportation,
    Entertainment,
    Utilities,
    Other,
    /// A stored name outside the known set; never accepted for new records
    Unrecognized(String),
}

impl Category {
    /// The known categories, in menu order
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Transportation,
        Category::Entertainment,
        Category::Utilities,
        Category::Other,
    ];

    /// Name as written to the backing file
    pub fn as_str(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Entertainment => "Entertainment",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
            Self::Unrecognized(name) => name,
        }
    }

    /// Whether this is one of the five known categories
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Map a stored name to a category; unknown names are preserved
    pub fn from_stored(name: &str) -> Self {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == name)
            .cloned()
            .unwrap_or_else(|| Self::Unrecognized(name.to_string()))
    }

    /// Pick a category from the 1-based menu number
    pub fn from_menu_choice(choice: usize) -> Option<Self> {
        let index = choice.checked_sub(1)?;
        Self::ALL.get(index).cloned()
    }

    /// Parse a category from user input
    ///
    /// Accepts a known name (case-insensitive) or a menu number 1-5.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(choice) = s.parse::<usize>() {
            return Self::from_menu_choice(choice);
        }
        Self::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .cloned()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_stored(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice() {
        assert_eq!(Category::from_menu_choice(1), Some(Category::Food));
        assert_eq!(Category::from_menu_choice(5), Some(Category::Other));
        assert_eq!(Category::from_menu_choice(0), None);
        assert_eq!(Category::from_menu_choice(6), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Category::parse("food"), Some(Category::Food));
        assert_eq!(Category::parse(" Utilities "), Some(Category::Utilities));
        assert_eq!(Category::parse("2"), Some(Category::Transportation));
        assert_eq!(Category::parse("Rent"), None);
        assert_eq!(Category::parse("9"), None);
    }

    #[test]
    fn test_unknown_name_survives_round_trip() {
        let cat: Category = serde_json::from_str("\"Groceries\"").unwrap();
        assert_eq!(cat, Category::Unrecognized("Groceries".into()));
        assert!(!cat.is_known());
        assert_eq!(serde_json::to_string(&cat).unwrap(), "\"Groceries\"");
    }

    #[test]
    fn test_stored_names_are_case_sensitive() {
        assert_eq!(Category::from_stored("Food"), Category::Food);
        assert_eq!(
            Category::from_stored("food"),
            Category::Unrecognized("food".into())
        );
    }
}
