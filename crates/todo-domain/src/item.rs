use serde::{Deserialize, Serialize};
use std::fmt;
use todo_core::TodoError;

pub type ItemId = u64;

/// Id of the item every session is seeded with.
pub const SEED_ITEM_ID: ItemId = 1;

/// Color tag cycled 1 → 2 → 3 → 4 → 1. Serialized as its number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Category {
    #[default]
    One,
    Two,
    Three,
    Four,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::One, Category::Two, Category::Three, Category::Four];

    pub fn number(self) -> u8 {
        match self {
            Category::One => 1,
            Category::Two => 2,
            Category::Three => 3,
            Category::Four => 4,
        }
    }

    /// The category after this one, `(n % 4) + 1`.
    pub fn next(self) -> Self {
        match self {
            Category::One => Category::Two,
            Category::Two => Category::Three,
            Category::Three => Category::Four,
            Category::Four => Category::One,
        }
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category.number()
    }
}

impl TryFrom<u8> for Category {
    type Error = TodoError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Category::One),
            2 => Ok(Category::Two),
            3 => Ok(Category::Three),
            4 => Ok(Category::Four),
            other => Err(TodoError::Validation(format!(
                "category must be between 1 and 4, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub category: Category,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            checked: false,
            category: Category::One,
        }
    }

    pub(crate) fn toggled(&self) -> Self {
        Self {
            checked: !self.checked,
            ..self.clone()
        }
    }

    pub(crate) fn with_text(&self, text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..self.clone()
        }
    }

    pub(crate) fn with_category(&self, category: Category) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }
}
