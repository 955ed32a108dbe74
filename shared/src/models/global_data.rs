//! Global bundle: shop inventory plus the single implicit user's account

use serde::{Deserialize, Serialize};

use super::ledger::{BeanTransaction, Order};
use super::product::Product;
use super::serde_helpers;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalData {
    /// Beans shop inventory
    pub shop_products: Vec<Product>,
    #[serde(deserialize_with = "serde_helpers::beans_floor")]
    pub user_beans: u64,
    /// Newest first
    pub transactions: Vec<BeanTransaction>,
    /// Newest first
    pub orders: Vec<Order>,
}

impl GlobalData {
    pub fn shop_product_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.shop_products.iter_mut().find(|p| p.id == id)
    }
}
