//! Domain types for the fixed subscription category set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Categorises a subscription for aggregation and reporting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Category {
    Entertainment,
    Utilities,
    Saas,
    Streaming,
    Shopping,
    Productivity,
    #[default]
    Other,
}

impl Category {
    /// All categories, in the order they are presented to users.
    pub const ALL: [Category; 7] = [
        Category::Entertainment,
        Category::Utilities,
        Category::Saas,
        Category::Streaming,
        Category::Shopping,
        Category::Productivity,
        Category::Other,
    ];

    /// Returns the presentation metadata associated with the category.
    pub fn info(self) -> &'static CategoryInfo {
        match self {
            Category::Entertainment => &CategoryInfo {
                label: "Entertainment",
                icon: "Music",
                color: "#FF5A5F",
            },
            Category::Utilities => &CategoryInfo {
                label: "Utilities",
                icon: "Lightbulb",
                color: "#57C5B6",
            },
            Category::Saas => &CategoryInfo {
                label: "SaaS",
                icon: "Cloud",
                color: "#8F43EE",
            },
            Category::Streaming => &CategoryInfo {
                label: "Streaming",
                icon: "Play",
                color: "#3A98B9",
            },
            Category::Shopping => &CategoryInfo {
                label: "Shopping",
                icon: "ShoppingBag",
                color: "#F4CE14",
            },
            Category::Productivity => &CategoryInfo {
                label: "Productivity",
                icon: "Briefcase",
                color: "#5CB8E4",
            },
            Category::Other => &CategoryInfo {
                label: "Other",
                icon: "Hash",
                color: "#6c757d",
            },
        }
    }

    /// Stable lowercase wire name for the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Entertainment => "entertainment",
            Category::Utilities => "utilities",
            Category::Saas => "saas",
            Category::Streaming => "streaming",
            Category::Shopping => "shopping",
            Category::Productivity => "productivity",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().label)
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "entertainment" => Ok(Category::Entertainment),
            "utilities" => Ok(Category::Utilities),
            "saas" => Ok(Category::Saas),
            "streaming" => Ok(Category::Streaming),
            "shopping" => Ok(Category::Shopping),
            "productivity" => Ok(Category::Productivity),
            "other" => Ok(Category::Other),
            _ => Err(UnknownCategory(value.to_string())),
        }
    }
}

/// Presentation metadata for a category: human label, icon name, hex colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when a category string does not match the fixed set.
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
