//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化全局日志订阅器
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 info 或 debug 级别
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "info,trivia_catalog=debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // 测试中可能被重复调用，忽略重复初始化
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 题库服务启动");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🗄️ 数据库: {}", config.database_path);
    match &config.seed_file {
        Some(path) => info!("🌱 初始题库: {}", path),
        None => info!("🌱 初始题库: 未配置"),
    }
    info!("{}", "=".repeat(60));
}

/// 记录题库导入信息
///
/// # 参数
/// - `categories`: 导入的分类数量
/// - `questions`: 导入的题目数量
pub fn log_seeded(categories: usize, questions: usize) {
    info!(
        "✓ 初始题库导入完成: {} 个分类, {} 道题目",
        categories, questions
    );
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
