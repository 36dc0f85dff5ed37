pub mod category_index;
pub mod pagination;
pub mod question_query;
pub mod quiz_selector;

pub use category_index::CategoryIndex;
pub use pagination::{page_from_param, paginate, QUESTIONS_PER_PAGE};
pub use question_query::QuestionQuery;
pub use quiz_selector::QuizSelector;
