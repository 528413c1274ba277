mod bank;

pub use bank::{MAX_HIGHEST_TABLE, QuestionBank};
