//! Product Model
//!
//! One type covers two populations: activity recommendations (CNY display
//! price, no stock) and global shop items (bean price, tracked stock).

use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Food,
    Merchandise,
    Spot,
    Digital,
}

/// Price currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Cny,
    Beans,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ProductType,
    pub name: String,
    /// Card subtitle, added after the first release (see activity backfill)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Beans for shop items, yuan for recommendations
    pub price: f64,
    pub currency: Currency,
    /// Only tracked for shop items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub display_order: i32,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
}

impl Product {
    /// New shop item priced in beans with tracked stock
    pub fn shop_item(
        id: impl Into<String>,
        name: impl Into<String>,
        price: u64,
        stock: u32,
        display_order: i32,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ProductType::Merchandise,
            name: name.into(),
            subtitle: None,
            description: String::new(),
            images: Vec::new(),
            price: price as f64,
            currency: Currency::Beans,
            stock: Some(stock),
            tags: None,
            display_order,
            is_active: true,
            created_at: created_at.into(),
        }
    }

    /// New activity recommendation (CNY display price, no stock)
    pub fn recommendation(
        id: impl Into<String>,
        kind: ProductType,
        name: impl Into<String>,
        display_order: i32,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            subtitle: None,
            description: String::new(),
            images: vec![String::new()],
            price: 0.0,
            currency: Currency::Cny,
            stock: None,
            tags: None,
            display_order,
            is_active: true,
            created_at: created_at.into(),
        }
    }

    /// Price as a whole bean amount.
    ///
    /// Fractional prices round up so a redemption never costs less than shown;
    /// negative prices count as free.
    pub fn bean_price(&self) -> u64 {
        if self.price.is_finite() && self.price > 0.0 {
            self.price.ceil() as u64
        } else {
            0
        }
    }

    /// True when the subtitle is absent or empty; whitespace counts as set
    pub fn lacks_subtitle(&self) -> bool {
        self.subtitle.as_deref().is_none_or(|s| s.is_empty())
    }

    pub fn has_stock(&self) -> bool {
        self.stock.is_some_and(|s| s > 0)
    }
}
