//! 核心模块 - 配置
//!
//! - [`Config`] - 环境变量驱动的存储配置

pub mod config;

pub use config::Config;
