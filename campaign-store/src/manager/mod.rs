//! DataManager - owner of all campaign state
//!
//! Holds the activity collection and the global bundle in memory, loaded
//! once at construction. Every mutation updates memory and then rewrites the
//! whole entry for the affected key before returning.
//!
//! # Load Flow
//!
//! ```text
//! load(storage)
//!     ├─ activities: absent → seed + write
//!     │              present → decode → migrate → write if needed
//!     └─ global:     absent → seed + write
//!                    present → decode → write if version stamp is stale
//! ```
//!
//! Mutating methods take `&mut self` and getters hand out shared borrows, so
//! nothing outside the manager can change state without persisting it.

mod error;
pub use error::*;

use serde::Serialize;
use shared::models::{
    Activity, Address, BeanTransaction, GlobalData, Order, OrderStatus, OrderType, Product,
};
use shared::util::{display_time, record_id};

use crate::migration::migrate_activities;
use crate::rewards::{LOTTERY_PRIZE_NAME, LOTTERY_SOURCE, LotteryPrize, Reward, redemption_source};
use crate::schema::{self, SCHEMA_VERSION};
use crate::seed;
use crate::storage::{ACTIVITIES_KEY, GLOBAL_DATA_KEY, KvStore};

/// User id stamped on orders while there is no authentication
pub const DEFAULT_USER_ID: &str = "user_1";

/// Result of a redemption attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedeemOutcome {
    Redeemed { order_id: String, balance: u64 },
    /// Nothing was changed
    InsufficientBeans { balance: u64, price: u64 },
}

impl RedeemOutcome {
    pub fn is_redeemed(&self) -> bool {
        matches!(self, RedeemOutcome::Redeemed { .. })
    }
}

/// Admin dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub activity_count: usize,
    pub product_count: usize,
    pub user_beans: u64,
    pub order_count: usize,
}

pub struct DataManager<S: KvStore> {
    storage: S,
    user_id: String,
    activities: Vec<Activity>,
    global: GlobalData,
}

impl<S: KvStore> std::fmt::Debug for DataManager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataManager")
            .field("storage", &"<KvStore>")
            .field("user_id", &self.user_id)
            .field("activities", &self.activities.len())
            .field("user_beans", &self.global.user_beans)
            .finish()
    }
}

impl<S: KvStore> DataManager<S> {
    /// Load state from storage, bootstrapping and migrating as needed
    pub fn load(storage: S) -> StoreResult<Self> {
        Self::load_for_user(storage, DEFAULT_USER_ID)
    }

    pub fn load_for_user(storage: S, user_id: impl Into<String>) -> StoreResult<Self> {
        let activities = Self::load_activities(&storage)?;
        let global = Self::load_global(&storage)?;
        let manager = Self {
            storage,
            user_id: user_id.into(),
            activities,
            global,
        };
        tracing::info!(
            activities = manager.activities.len(),
            shop_products = manager.global.shop_products.len(),
            user_beans = manager.global.user_beans,
            "DataManager loaded"
        );
        Ok(manager)
    }

    fn load_activities(storage: &S) -> StoreResult<Vec<Activity>> {
        let Some(text) = storage.get(ACTIVITIES_KEY)? else {
            tracing::info!("No stored activities, writing seed activity");
            let activities = vec![seed::activity()];
            storage.set(ACTIVITIES_KEY, &schema::encode(&activities)?)?;
            return Ok(activities);
        };

        let decoded = schema::decode::<Vec<Activity>>(ACTIVITIES_KEY, &text)?;
        let mut activities = decoded.data;
        let migration = migrate_activities(decoded.version, &mut activities);
        if migration.needs_save() {
            tracing::info!(
                from_version = migration.from,
                to_version = SCHEMA_VERSION,
                changed = migration.changed,
                "Rewriting migrated activities"
            );
            storage.set(ACTIVITIES_KEY, &schema::encode(&activities)?)?;
        }
        Ok(activities)
    }

    fn load_global(storage: &S) -> StoreResult<GlobalData> {
        let Some(text) = storage.get(GLOBAL_DATA_KEY)? else {
            tracing::info!("No stored global data, writing seed shop and balance");
            let global = seed::global_data();
            storage.set(GLOBAL_DATA_KEY, &schema::encode(&global)?)?;
            return Ok(global);
        };

        let decoded = schema::decode::<GlobalData>(GLOBAL_DATA_KEY, &text)?;
        if decoded.version < SCHEMA_VERSION {
            tracing::info!(from_version = decoded.version, "Stamping global data version");
            storage.set(GLOBAL_DATA_KEY, &schema::encode(&decoded.data)?)?;
        }
        Ok(decoded.data)
    }

    fn save_activities(&self) -> StoreResult<()> {
        let text = schema::encode(&self.activities)?;
        self.storage.set(ACTIVITIES_KEY, &text).inspect_err(|e| {
            tracing::error!(error = %e, "Failed to persist activities, memory and storage diverged");
        })?;
        tracing::debug!(bytes = text.len(), count = self.activities.len(), "Activities persisted");
        Ok(())
    }

    fn save_global(&self) -> StoreResult<()> {
        let text = schema::encode(&self.global)?;
        self.storage.set(GLOBAL_DATA_KEY, &text).inspect_err(|e| {
            tracing::error!(error = %e, "Failed to persist global data, memory and storage diverged");
        })?;
        tracing::debug!(bytes = text.len(), user_beans = self.global.user_beans, "Global data persisted");
        Ok(())
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    // ========== Activities ==========

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }

    /// Replace the activity with the same id, or append it
    pub fn save_activity(&mut self, activity: Activity) -> StoreResult<()> {
        match self.activities.iter_mut().find(|a| a.id == activity.id) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
        self.save_activities()
    }

    pub fn delete_activity(&mut self, id: &str) -> StoreResult<()> {
        self.activities.retain(|a| a.id != id);
        self.save_activities()
    }

    /// Add one vote to an option and persist it.
    ///
    /// Returns the new count, or `None` when the activity or option does not
    /// exist or the activity runs a quiz.
    pub fn cast_vote(&mut self, activity_id: &str, option_id: &str) -> StoreResult<Option<u64>> {
        let Some(option) = self
            .activities
            .iter_mut()
            .find(|a| a.id == activity_id)
            .and_then(|a| a.interaction.vote_option_mut(option_id))
        else {
            return Ok(None);
        };
        option.votes += 1;
        let votes = option.votes;
        self.save_activities()?;
        Ok(Some(votes))
    }

    // ========== Shop ==========

    pub fn shop_products(&self) -> &[Product] {
        &self.global.shop_products
    }

    pub fn shop_product(&self, id: &str) -> Option<&Product> {
        self.global.shop_products.iter().find(|p| p.id == id)
    }

    pub fn save_shop_product(&mut self, product: Product) -> StoreResult<()> {
        match self.global.shop_product_mut(&product.id) {
            Some(existing) => *existing = product,
            None => self.global.shop_products.push(product),
        }
        self.save_global()
    }

    pub fn delete_shop_product(&mut self, id: &str) -> StoreResult<()> {
        self.global.shop_products.retain(|p| p.id != id);
        self.save_global()
    }

    // ========== Beans ==========

    pub fn user_beans(&self) -> u64 {
        self.global.user_beans
    }

    /// Ledger, newest first
    pub fn transactions(&self) -> &[BeanTransaction] {
        &self.global.transactions
    }

    /// Credit `amount`; the balance saturates at `u64::MAX`
    pub fn add_beans(&mut self, amount: u64, source: &str) -> StoreResult<()> {
        self.global.user_beans = self.global.user_beans.saturating_add(amount);
        self.global.transactions.insert(
            0,
            BeanTransaction::income(record_id(), amount, source, display_time()),
        );
        self.save_global()
    }

    /// Credit a catalogue reward
    pub fn reward(&mut self, reward: Reward) -> StoreResult<()> {
        self.add_beans(reward.amount(), reward.source())
    }

    /// Exchange beans for a shop product.
    ///
    /// `product` may be a stale copy held by the caller: its stock only
    /// decides whether a decrement is attempted, the decrement itself goes to
    /// the live inventory entry with the same id.
    pub fn redeem_product(&mut self, product: &Product, address: Address) -> StoreResult<RedeemOutcome> {
        let price = product.bean_price();
        let balance = self.global.user_beans;
        if balance < price {
            tracing::warn!(product_id = %product.id, balance, price, "Redemption refused: insufficient beans");
            return Ok(RedeemOutcome::InsufficientBeans { balance, price });
        }

        let time = display_time();
        self.global.user_beans -= price;
        self.global.transactions.insert(
            0,
            BeanTransaction::expense(record_id(), price, redemption_source(&product.name), time.clone()),
        );

        let order_id = record_id();
        self.global.orders.insert(
            0,
            Order {
                id: order_id.clone(),
                user_id: self.user_id.clone(),
                kind: OrderType::Redeem,
                product_name: product.name.clone(),
                amount: price,
                status: OrderStatus::Pending,
                address: Some(address),
                time,
            },
        );

        if product.has_stock()
            && let Some(live) = self.global.shop_product_mut(&product.id)
            && let Some(stock) = live.stock.as_mut()
            && *stock > 0
        {
            *stock -= 1;
        }

        self.save_global()?;
        tracing::info!(product_id = %product.id, order_id = %order_id, price, balance = self.global.user_beans, "Product redeemed");
        Ok(RedeemOutcome::Redeemed {
            order_id,
            balance: self.global.user_beans,
        })
    }

    /// Book a lottery win: beans go to the balance, eggs become a free order
    pub fn record_lottery_win(
        &mut self,
        prize: LotteryPrize,
        amount: u64,
        address: Option<Address>,
    ) -> StoreResult<()> {
        match prize {
            LotteryPrize::Beans => self.add_beans(amount, LOTTERY_SOURCE),
            LotteryPrize::Eggs => {
                self.global.orders.insert(
                    0,
                    Order {
                        id: record_id(),
                        user_id: self.user_id.clone(),
                        kind: OrderType::Lottery,
                        product_name: LOTTERY_PRIZE_NAME.into(),
                        amount: 0,
                        status: OrderStatus::Pending,
                        address,
                        time: display_time(),
                    },
                );
                self.save_global()
            }
        }
    }

    /// Orders, newest first
    pub fn orders(&self) -> &[Order] {
        &self.global.orders
    }

    pub fn dashboard(&self) -> DashboardStats {
        DashboardStats {
            activity_count: self.activities.len(),
            product_count: self.global.shop_products.len(),
            user_beans: self.global.user_beans,
            order_count: self.global.orders.len(),
        }
    }
}

#[cfg(test)]
mod tests;
