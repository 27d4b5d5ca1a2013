//! # rcl-reference
//!
//! Static reference data for the recall experiment: the three articles and
//! the multiple-choice quiz of every revision, each with its source-type map.
//!
//! The data lives in embedded TOML (`data/*.toml`) and is the single source
//! of truth for answer keys and source types. A directory with the same file
//! names can replace it at runtime. Loading always validates:
//!
//! - every question has 4 options and an in-range keyed answer
//! - every question index has exactly one source type
//! - no false lure points at the keyed answer

mod article;
mod data;
mod error;
mod quiz;
mod source_map;
mod validate;

pub use article::Article;
pub use data::{ARTICLES_FILE, QUIZ_V1_FILE, QUIZ_V2_FILE, ReferenceData};
pub use error::ReferenceError;
pub use quiz::{ArticleQuiz, OPTION_COUNT, Question, QuizRevision};
pub use source_map::{FalseLure, SourceTypeMap};
pub use validate::ValidationIssue;
