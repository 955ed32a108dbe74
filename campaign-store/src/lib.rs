//! Campaign Store - 节气活动数据管理
//!
//! # 架构概述
//!
//! 活动页与管理后台的全部持久化状态都由 [`DataManager`] 持有：
//!
//! - **活动** (`manager`): 活动配置的增删改查、投票计数
//! - **商城** (`manager`): 豆子商城商品、兑换、库存扣减
//! - **账户** (`manager`): 节气豆余额、流水、订单、抽奖
//! - **存储** (`storage`): redb 键值存储，两条记录整体覆盖写
//! - **迁移** (`schema`, `migration`): 带版本号的存储格式与回填
//!
//! # 模块结构
//!
//! ```text
//! campaign-store/src/
//! ├── core/          # 配置
//! ├── utils/         # 日志
//! ├── storage/       # KvStore trait, redb / 内存实现
//! ├── manager/       # DataManager
//! ├── schema.rs      # 版本信封
//! ├── migration.rs   # 迁移步骤
//! ├── seed.rs        # 初始数据
//! ├── rewards.rs     # 奖励目录
//! └── export.rs      # CSV 导出
//! ```

pub mod core;
pub mod export;
pub mod manager;
pub mod migration;
pub mod rewards;
pub mod schema;
pub mod seed;
pub mod storage;
pub mod utils;

// Re-export 公共类型
pub use self::core::Config;
pub use manager::{DashboardStats, DataManager, RedeemOutcome, StoreError, StoreResult};
pub use rewards::{LotteryPrize, Reward};
pub use storage::{KvStore, MemoryStore, RedbStore, StorageError};

// Re-export logger functions
pub use utils::logger::init_logger;

/// Load `.env`, then initialize logging from the resulting environment
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger(&config.log_level, config.log_dir.as_deref());
    config
}
