//! Bean ledger and order records

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Ledger entry direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// Bean transaction (节气豆明细)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeanTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Magnitude; sign comes from `kind`
    #[serde(deserialize_with = "serde_helpers::beans_ceil")]
    pub amount: u64,
    pub source: String,
    pub time: String,
}

impl BeanTransaction {
    pub fn income(id: String, amount: u64, source: impl Into<String>, time: String) -> Self {
        Self {
            id,
            kind: TransactionType::Income,
            amount,
            source: source.into(),
            time,
        }
    }

    pub fn expense(id: String, amount: u64, source: impl Into<String>, time: String) -> Self {
        Self {
            id,
            kind: TransactionType::Expense,
            amount,
            source: source.into(),
            time,
        }
    }
}

/// Where an order came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Redeem,
    Lottery,
}

/// Fulfilment status; nothing in the store ships orders yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Shipped,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Shipped => "shipped",
        }
    }
}

/// Shipping address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: OrderType,
    pub product_name: String,
    /// Beans spent, 0 for lottery prizes
    #[serde(deserialize_with = "serde_helpers::beans_ceil")]
    pub amount: u64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub time: String,
}
