use crate::api::{self, AppState};
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{seed_store, QuestionStore, SqliteStore};
use crate::models::load_seed_catalog;
use crate::utils::logging::{log_seeded, log_startup};
use crate::workflow::CatalogFlow;
use anyhow::{Context, Result};
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    router: Router,
}

impl App {
    /// 初始化应用：打开题库、导入初始数据、构建路由
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let store: Arc<dyn QuestionStore> = Arc::new(
            SqliteStore::open(&config.database_path)
                .with_context(|| format!("无法打开数据库: {}", config.database_path))?,
        );

        if let Some(seed_file) = &config.seed_file {
            seed_if_empty(store.as_ref(), Path::new(seed_file)).await?;
        }

        let router = api::router(AppState::new(CatalogFlow::new(store)));

        Ok(Self { config, router })
    }

    /// 运行应用主逻辑
    pub async fn run(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.config.bind_addr)
            .await
            .with_context(|| format!("无法监听地址: {}", self.config.bind_addr))?;

        info!("🌐 题库服务监听 http://{}", self.config.bind_addr);

        axum::serve(listener, self.router)
            .await
            .context("HTTP 服务异常退出")?;

        Ok(())
    }
}

/// 题库没有任何分类时导入初始题库
async fn seed_if_empty(store: &dyn QuestionStore, seed_file: &Path) -> AppResult<()> {
    if !store.categories()?.is_empty() {
        info!("题库已有数据，跳过初始导入");
        return Ok(());
    }
    if !seed_file.exists() {
        warn!("⚠️ 初始题库文件不存在: {}", seed_file.display());
        return Ok(());
    }

    let catalog = load_seed_catalog(seed_file).await?;
    let (categories, questions) = seed_store(store, &catalog)?;
    log_seeded(categories, questions);
    Ok(())
}
