//! Reward catalogue - ledger sources and bean amounts used by the campaign

use std::str::FromStr;
use thiserror::Error;

/// Balance granted to a fresh installation
pub const FIRST_LOGIN_BEANS: u64 = 100;
pub const FIRST_LOGIN_SOURCE: &str = "首次登录";

/// Ledger source for lottery bean prizes
pub const LOTTERY_SOURCE: &str = "幸运抽奖";

/// Order name for the physical lottery prize
pub const LOTTERY_PRIZE_NAME: &str = "春分好运鸡蛋 (抽奖)";

/// Ledger source for a shop redemption
pub fn redemption_source(product_name: &str) -> String {
    format!("兑换-{}", product_name)
}

/// Engagement rewards paid out by the activity page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reward {
    /// 参与投票
    Vote,
    /// 推荐美食 (write-in vote option)
    Recommendation,
    /// Bean prize from the lottery wheel
    LotteryBeans,
}

impl Reward {
    pub fn amount(&self) -> u64 {
        match self {
            Reward::Vote => 20,
            Reward::Recommendation => 30,
            Reward::LotteryBeans => 50,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Reward::Vote => "参与投票",
            Reward::Recommendation => "推荐美食",
            Reward::LotteryBeans => LOTTERY_SOURCE,
        }
    }
}

/// Lottery prize kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotteryPrize {
    /// Beans credited to the balance
    Beans,
    /// Physical eggs, shipped through a free order
    Eggs,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown lottery prize: {0}")]
pub struct UnknownPrize(pub String);

impl FromStr for LotteryPrize {
    type Err = UnknownPrize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beans" => Ok(LotteryPrize::Beans),
            "eggs" => Ok(LotteryPrize::Eggs),
            other => Err(UnknownPrize(other.to_string())),
        }
    }
}
