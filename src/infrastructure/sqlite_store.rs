//! SQLite 题库存储

use crate::error::{StoreError, StoreResult};
use crate::infrastructure::store::QuestionStore;
use crate::models::{Category, NewQuestion, Question};
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Mutex;
use tracing::debug;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS categories (
        id   INTEGER PRIMARY KEY,
        type TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS questions (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        question   TEXT NOT NULL,
        answer     TEXT NOT NULL,
        category   INTEGER NOT NULL,
        difficulty INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_questions_category ON questions (category);
";

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// SQLite 存储
///
/// 持有唯一的连接，所有访问通过互斥锁串行化
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// 打开（必要时创建）数据库文件
    pub fn open(path: &str) -> StoreResult<Self> {
        debug!("打开 SQLite 数据库: {}", path);
        Self::from_connection(Connection::open(path)?)
    }

    /// 打开内存数据库
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        register_lower_unicode(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> rusqlite::Result<T>) -> StoreResult<T> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| StoreError::poisoned("sqlite connection"))?;
        Ok(f(&conn)?)
    }

    fn query_questions<P: rusqlite::Params>(
        &self,
        filter: &str,
        params: P,
    ) -> StoreResult<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions {} ORDER BY id",
            QUESTION_COLUMNS, filter
        );
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map(params, question_from_row)?;
            rows.collect()
        })
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}

/// 注册 `lower_unicode(text)`，内置 `lower()` 与 `LIKE` 只处理 ASCII
fn register_lower_unicode(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "lower_unicode",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text = ctx.get::<String>(0)?;
            Ok(text.to_lowercase())
        },
    )
}

/// 转义 LIKE 通配符，使搜索词按字面匹配
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

impl QuestionStore for SqliteStore {
    fn categories(&self) -> StoreResult<Vec<Category>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id")?;
            let rows = stmt.query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?;
            rows.collect()
        })
    }

    fn category(&self, id: i64) -> StoreResult<Option<Category>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Category {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()
        })
    }

    fn all_questions(&self) -> StoreResult<Vec<Question>> {
        self.query_questions("", [])
    }

    fn questions_in_category(&self, category_id: i64) -> StoreResult<Vec<Question>> {
        self.query_questions("WHERE category = ?1", params![category_id])
    }

    fn questions_containing(&self, term: &str) -> StoreResult<Vec<Question>> {
        self.query_questions(
            "WHERE lower_unicode(question) LIKE ?1 ESCAPE '\\'",
            params![like_pattern(&term.to_lowercase())],
        )
    }

    fn question(&self, id: i64) -> StoreResult<Option<Question>> {
        let sql = format!("SELECT {} FROM questions WHERE id = ?1", QUESTION_COLUMNS);
        self.with_conn(|conn| {
            conn.query_row(&sql, params![id], question_from_row)
                .optional()
        })
    }

    fn insert_question(&self, question: &NewQuestion) -> StoreResult<Question> {
        let id = self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO questions (question, answer, category, difficulty)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    question.question,
                    question.answer,
                    question.category,
                    question.difficulty
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })?;
        Ok(question.clone().with_id(id))
    }

    fn delete_question(&self, id: i64) -> StoreResult<bool> {
        let affected =
            self.with_conn(|conn| conn.execute("DELETE FROM questions WHERE id = ?1", params![id]))?;
        Ok(affected > 0)
    }

    fn insert_category(&self, category: &Category) -> StoreResult<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO categories (id, type) VALUES (?1, ?2)",
                params![category.id, category.name],
            )
        })?;
        Ok(())
    }
}
