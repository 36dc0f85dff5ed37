use crate::error::{AppResult, ConfigError};
use std::str::FromStr;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP 监听地址
    pub bind_addr: String,
    /// SQLite 数据库文件路径（支持 `:memory:`）
    pub database_path: String,
    /// 空库时导入的 TOML 题库文件，`None` 表示不导入
    pub seed_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".to_string(),
            database_path: "trivia.sqlite".to_string(),
            seed_file: Some("data/trivia_seed.toml".to_string()),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量读取配置，未设置的项使用默认值
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();
        let seed_file = match std::env::var("TRIVIA_SEED_FILE") {
            Ok(v) if v.trim().is_empty() => None,
            Ok(v) => Some(v),
            Err(_) => default.seed_file,
        };
        Ok(Self {
            bind_addr: std::env::var("TRIVIA_BIND_ADDR").unwrap_or(default.bind_addr),
            database_path: std::env::var("TRIVIA_DATABASE_PATH").unwrap_or(default.database_path),
            seed_file,
            verbose_logging: parse_env("TRIVIA_VERBOSE_LOGGING", "bool")?
                .unwrap_or(default.verbose_logging),
        })
    }
}

fn parse_env<T: FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match std::env::var(var_name) {
        Ok(value) => parse_value(var_name, &value, expected_type).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_value<T: FromStr>(var_name: &str, value: &str, expected_type: &str) -> AppResult<T> {
    value.trim().parse().map_err(|_| {
        ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        }
        .into()
    })
}
