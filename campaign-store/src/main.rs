use anyhow::Context;
use campaign_store::{DataManager, RedbStore, export, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志, 配置)
    let config = setup_environment();
    tracing::info!(environment = %config.environment, "Campaign store starting...");

    // 2. 打开存储
    std::fs::create_dir_all(&config.work_dir)
        .with_context(|| format!("creating work dir {}", config.work_dir))?;
    let db_path = config.db_path();
    let storage = RedbStore::open(&db_path)
        .with_context(|| format!("opening {}", db_path.display()))?;

    // 3. 加载数据 (首次启动写入初始数据，旧数据迁移)
    let manager = DataManager::load_for_user(storage, config.user_id.clone())
        .context("loading campaign data")?;

    let stats = manager.dashboard();
    tracing::info!(
        activities = stats.activity_count,
        products = stats.product_count,
        user_beans = stats.user_beans,
        orders = stats.order_count,
        "Dashboard"
    );

    // 4. 可选导出
    if let Some(dir) = &config.export_dir {
        let activity_id = manager
            .activities()
            .first()
            .map(|a| a.id.as_str())
            .unwrap_or("all");
        let paths = export::write_exports(dir, activity_id, manager.orders())
            .with_context(|| format!("writing exports to {}", dir))?;
        for path in paths {
            tracing::info!(path = %path.display(), "Export written");
        }
    }

    Ok(())
}
