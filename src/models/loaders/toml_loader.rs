use crate::error::{AppResult, FileError};
use crate::models::question::{Category, NewQuestion};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 初始题库：分类与题目
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedCatalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<NewQuestion>,
}

/// 从 TOML 文件加载初始题库
pub async fn load_seed_catalog(toml_file_path: &Path) -> AppResult<SeedCatalog> {
    let path = toml_file_path.to_string_lossy().to_string();

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path.clone(),
            source,
        })?;

    let catalog = parse_seed_catalog(&content, &path)?;

    tracing::info!(
        "成功加载 {}: {} 个分类, {} 道题目",
        toml_file_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy(),
        catalog.categories.len(),
        catalog.questions.len()
    );

    Ok(catalog)
}

fn parse_seed_catalog(content: &str, path: &str) -> AppResult<SeedCatalog> {
    let catalog: SeedCatalog =
        toml::from_str(content).map_err(|source| FileError::TomlParseFailed {
            path: path.to_string(),
            source,
        })?;
    Ok(catalog)
}
