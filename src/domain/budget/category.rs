//! Expense categories.
//!
//! The six categories are fixed; their serialized form keeps the
//! Portuguese labels the dashboard has always shown.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a budget line item or showcase entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Espaço & Buffet")]
    Venue,
    #[serde(rename = "Decoração")]
    Decor,
    #[serde(rename = "Bebidas")]
    Drink,
    #[serde(rename = "Música & Iluminação")]
    Music,
    #[serde(rename = "Foto & Vídeo")]
    Photo,
    #[serde(rename = "Extras")]
    Extra,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 6] = [
        Category::Venue,
        Category::Decor,
        Category::Drink,
        Category::Music,
        Category::Photo,
        Category::Extra,
    ];

    /// The Portuguese display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Venue => "Espaço & Buffet",
            Category::Decor => "Decoração",
            Category::Drink => "Bebidas",
            Category::Music => "Música & Iluminação",
            Category::Photo => "Foto & Vídeo",
            Category::Extra => "Extras",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_portuguese_labels() {
        let json = serde_json::to_string(&Category::Venue).unwrap();
        assert_eq!(json, "\"Espaço & Buffet\"");

        let json = serde_json::to_string(&Category::Music).unwrap();
        assert_eq!(json, "\"Música & Iluminação\"");
    }

    #[test]
    fn deserializes_from_labels() {
        let cat: Category = serde_json::from_str("\"Decoração\"").unwrap();
        assert_eq!(cat, Category::Decor);
    }

    #[test]
    fn all_covers_every_variant() {
        assert_eq!(Category::ALL.len(), 6);
        for cat in Category::ALL {
            assert_eq!(cat.to_string(), cat.label());
        }
    }
}
