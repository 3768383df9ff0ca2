//! Item records, categories and transfer shapes.

use common::{ItemId, Money};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result, UnknownCategory};

/// Highest price accepted for a single item.
pub const MAX_PRICE: i64 = 100_000;

/// Menu category an item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Rice bowls, noodles and other main dishes.
    Main,
    /// Small plates served alongside a main.
    Side,
    /// Hot and cold drinks.
    Drink,
    /// Desserts and snacks.
    Dessert,
}

impl Category {
    /// All categories, in menu order.
    pub const ALL: [Category; 4] = [
        Category::Main,
        Category::Side,
        Category::Drink,
        Category::Dessert,
    ];

    /// Wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Main => "MAIN",
            Category::Side => "SIDE",
            Category::Drink => "DRINK",
            Category::Dessert => "DESSERT",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory {
                name: s.to_string(),
            })
    }
}

/// Inbound item definition, as submitted by a client.
///
/// Every field is optional on the wire so that absence can be reported as a
/// typed validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub eng_name: Option<String>,
    pub kor_name: Option<String>,
    #[serde(default)]
    pub price: i64,
    pub category: Option<Category>,
    #[serde(default)]
    pub image_path: Option<String>,
}

impl ItemRequest {
    /// Creates a fully populated request without an image.
    pub fn new(
        eng_name: impl Into<String>,
        kor_name: impl Into<String>,
        price: i64,
        category: Category,
    ) -> Self {
        Self {
            eng_name: Some(eng_name.into()),
            kor_name: Some(kor_name.into()),
            price,
            category: Some(category),
            image_path: None,
        }
    }

    /// Attaches an image path. The path is not checked against the image store.
    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    /// Validates the request and produces the checked field set.
    ///
    /// Required fields are checked before the price range.
    pub fn validate(&self) -> Result<ItemDraft> {
        let eng_name = required_text(self.eng_name.as_deref(), "eng_name")?;
        let kor_name = required_text(self.kor_name.as_deref(), "kor_name")?;
        let category = self
            .category
            .ok_or(CatalogError::MissingField { field: "category" })?;

        if self.price <= 0 {
            return Err(CatalogError::InvalidPrice { price: self.price });
        }
        if self.price > MAX_PRICE {
            return Err(CatalogError::PriceTooHigh {
                price: self.price,
                max: MAX_PRICE,
            });
        }

        Ok(ItemDraft {
            eng_name,
            kor_name,
            price: Money::new(self.price),
            category,
            image_path: self.image_path.clone(),
        })
    }
}

fn required_text(value: Option<&str>, field: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(CatalogError::MissingField { field }),
    }
}

/// A validated set of mutable item fields.
///
/// Only obtainable from [`ItemRequest::validate`], so every `Item` built
/// from one satisfies the catalog rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    eng_name: String,
    kor_name: String,
    price: Money,
    category: Category,
    image_path: Option<String>,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    eng_name: String,
    kor_name: String,
    price: Money,
    category: Category,
    image_path: Option<String>,
}

impl Item {
    /// Creates a new item with a freshly assigned ID.
    pub fn create(draft: ItemDraft) -> Self {
        Self::with_id(ItemId::new(), draft)
    }

    /// Creates an item with a known ID.
    pub fn with_id(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            eng_name: draft.eng_name,
            kor_name: draft.kor_name,
            price: draft.price,
            category: draft.category,
            image_path: draft.image_path,
        }
    }

    /// Replaces every mutable field. The ID is kept.
    pub fn update(&mut self, draft: ItemDraft) {
        self.eng_name = draft.eng_name;
        self.kor_name = draft.kor_name;
        self.price = draft.price;
        self.category = draft.category;
        self.image_path = draft.image_path;
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn eng_name(&self) -> &str {
        &self.eng_name
    }

    pub fn kor_name(&self) -> &str {
        &self.kor_name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }
}

/// Outbound item shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub id: ItemId,
    pub eng_name: String,
    pub kor_name: String,
    pub price: Money,
    pub image_path: Option<String>,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            eng_name: item.eng_name.clone(),
            kor_name: item.kor_name.clone(),
            price: item.price,
            image_path: item.image_path.clone(),
        }
    }
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            eng_name: item.eng_name,
            kor_name: item.kor_name,
            price: item.price,
            image_path: item.image_path,
        }
    }
}
