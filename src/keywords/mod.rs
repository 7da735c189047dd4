// # Keywords Module
//
// Pure keyword processing, no I/O:
//
// - **column**: picks the column keywords are read from
// - **extract**: turns a column into trimmed, non-empty strings
// - **batch**: deduplicates extracted keywords and diffs them against storage

mod batch;
mod column;
mod extract;

pub use batch::KeywordBatch;
pub use column::{resolve_column, ColumnMatch, MatchRule};
pub use extract::extract_keywords;
