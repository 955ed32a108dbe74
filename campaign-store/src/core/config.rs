use std::path::PathBuf;

use crate::manager::DEFAULT_USER_ID;

/// Store configuration
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 |
/// | DB_FILE | campaign.redb | redb 文件名 (相对工作目录) |
/// | USER_ID | user_1 | 订单上的用户 ID (无登录) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (unset) | 日志目录，设置后按天滚动写文件 (自动创建) |
/// | EXPORT_DIR | (unset) | 启动时导出订单 CSV 的目录 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/campaign LOG_LEVEL=debug cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存放数据库文件
    pub work_dir: String,
    pub db_file: String,
    /// Single implicit user until accounts exist
    pub user_id: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub export_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: non_empty_var("WORK_DIR").unwrap_or_else(|| "./data".into()),
            db_file: non_empty_var("DB_FILE").unwrap_or_else(|| "campaign.redb".into()),
            user_id: non_empty_var("USER_ID").unwrap_or_else(|| DEFAULT_USER_ID.into()),
            log_level: non_empty_var("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty_var("LOG_DIR"),
            export_dir: non_empty_var("EXPORT_DIR"),
            environment: non_empty_var("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
