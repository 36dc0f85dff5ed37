use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 资源不存在
    #[error("资源不存在: {0}")]
    NotFound(#[from] NotFoundError),
    /// 请求缺少必要内容
    #[error("请求无效: {0}")]
    BadRequest(#[from] RequestError),
    /// 请求内容完整但取值非法
    #[error("无法处理的请求: {0}")]
    Unprocessable(#[from] ValidationError),
    /// 存储层错误
    #[error("存储错误: {0}")]
    Store(#[from] StoreError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 后台任务执行失败
    #[error("后台任务失败: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// 资源不存在错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotFoundError {
    /// 没有任何分类
    #[error("分类目录为空")]
    EmptyCatalog,
    /// 页码超出范围
    #[error("第 {page} 页没有题目")]
    PageOutOfRange { page: usize },
    /// 题目不存在
    #[error("题目 {id} 不存在")]
    Question { id: i64 },
    /// 分类不存在
    #[error("分类 {id} 不存在")]
    Category { id: i64 },
    /// 搜索无结果
    #[error("没有题目包含 '{term}'")]
    NoMatches { term: String },
    /// 路由不存在
    #[error("路径 {path} 不存在")]
    Route { path: String },
}

/// 请求缺少必要内容
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// 请求体缺失或无法解析
    #[error("请求体缺失或不是合法的 JSON")]
    MissingBody,
    /// 缺少必填字段
    #[error("缺少必填字段: {field}")]
    MissingField { field: &'static str },
}

/// 字段取值非法
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// 文本字段为空
    #[error("字段 {field} 不能为空")]
    BlankField { field: &'static str },
    /// 难度必须为正整数
    #[error("难度 {value} 必须为正整数")]
    InvalidDifficulty { value: i64 },
}

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite 执行失败
    #[error("SQLite 执行失败: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// 锁已中毒
    #[error("存储锁已中毒: {resource}")]
    LockPoisoned { resource: &'static str },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建题目不存在错误
    pub fn question_not_found(id: i64) -> Self {
        AppError::NotFound(NotFoundError::Question { id })
    }

    /// 创建分类不存在错误
    pub fn category_not_found(id: i64) -> Self {
        AppError::NotFound(NotFoundError::Category { id })
    }

    /// 创建页码超出范围错误
    pub fn page_out_of_range(page: usize) -> Self {
        AppError::NotFound(NotFoundError::PageOutOfRange { page })
    }

    /// 创建缺少字段错误
    pub fn missing_field(field: &'static str) -> Self {
        AppError::BadRequest(RequestError::MissingField { field })
    }

    /// 是否属于服务端内部错误
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AppError::Store(_) | AppError::File(_) | AppError::Config(_) | AppError::Task(_)
        )
    }
}

impl StoreError {
    /// 创建存储锁中毒错误
    pub fn poisoned(resource: &'static str) -> Self {
        StoreError::LockPoisoned { resource }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

/// 存储层结果类型
pub type StoreResult<T> = Result<T, StoreError>;
