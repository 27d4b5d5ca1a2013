//! Loading and lookups over the full reference data set.

use std::collections::BTreeMap;
use std::path::Path;

use rcl_core::enums::Revision;
use serde::Deserialize;

use crate::article::Article;
use crate::error::ReferenceError;
use crate::quiz::{ArticleQuiz, Question, QuizRevision};
use crate::source_map::SourceTypeMap;
use crate::validate::{ValidationIssue, check_revision};

pub const ARTICLES_FILE: &str = "articles.toml";
pub const QUIZ_V1_FILE: &str = "quiz_v1.toml";
pub const QUIZ_V2_FILE: &str = "quiz_v2.toml";

const BUILTIN_ARTICLES: &str = include_str!("../data/articles.toml");
const BUILTIN_QUIZ_V1: &str = include_str!("../data/quiz_v1.toml");
const BUILTIN_QUIZ_V2: &str = include_str!("../data/quiz_v2.toml");

#[derive(Deserialize)]
struct ArticlesFile {
    article: Vec<Article>,
}

/// Articles plus every quiz revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    articles: Vec<Article>,
    quizzes: BTreeMap<Revision, QuizRevision>,
}

impl ReferenceData {
    /// The reference data compiled into the binary, validated.
    pub fn builtin() -> Result<Self, ReferenceError> {
        Self::from_toml(BUILTIN_ARTICLES, BUILTIN_QUIZ_V1, BUILTIN_QUIZ_V2)
    }

    /// Load `articles.toml`, `quiz_v1.toml`, and `quiz_v2.toml` from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, ReferenceError> {
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| ReferenceError::Io { path, source })
        };
        let data = Self::from_toml(&read(ARTICLES_FILE)?, &read(QUIZ_V1_FILE)?, &read(QUIZ_V2_FILE)?)?;
        tracing::debug!(dir = %dir.display(), "loaded reference data");
        Ok(data)
    }

    /// Parse the three files from strings and validate the result.
    pub fn from_toml(articles: &str, quiz_v1: &str, quiz_v2: &str) -> Result<Self, ReferenceError> {
        let articles: ArticlesFile = parse(ARTICLES_FILE, articles)?;
        let mut quizzes = BTreeMap::new();
        for (file, raw, expected) in [
            (QUIZ_V1_FILE, quiz_v1, Revision::V1),
            (QUIZ_V2_FILE, quiz_v2, Revision::V2),
        ] {
            let quiz: QuizRevision = parse(file, raw)?;
            if quiz.revision != expected {
                return Err(ReferenceError::Invalid {
                    issues: vec![ValidationIssue {
                        revision: Some(quiz.revision),
                        article_key: file.to_string(),
                        question: None,
                        message: format!("file declares revision {}, expected {expected}", quiz.revision),
                    }],
                });
            }
            quizzes.insert(expected, quiz);
        }

        let data = Self {
            articles: articles.article,
            quizzes,
        };
        data.validate()?;
        Ok(data)
    }

    /// Run every consistency rule, failing with all issues found.
    pub fn validate(&self) -> Result<(), ReferenceError> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ReferenceError::Invalid { issues })
        }
    }

    /// Every consistency issue in the data; empty when valid.
    #[must_use]
    pub fn issues(&self) -> Vec<ValidationIssue> {
        let mut found = Vec::new();
        let keys = self.article_keys();
        let mut seen = Vec::new();
        for article in &self.articles {
            if seen.contains(&article.key.as_str()) {
                found.push(ValidationIssue {
                    revision: None,
                    article_key: article.key.clone(),
                    question: None,
                    message: "article key defined more than once".into(),
                });
            }
            seen.push(article.key.as_str());
        }
        for quiz in self.quizzes.values() {
            check_revision(quiz, &keys, &mut found);
        }
        found
    }

    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn article_keys(&self) -> Vec<&str> {
        self.articles.iter().map(|a| a.key.as_str()).collect()
    }

    #[must_use]
    pub fn article(&self, key: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.key == key)
    }

    #[must_use]
    pub fn quiz(&self, article_key: &str, revision: Revision) -> Option<&ArticleQuiz> {
        self.quizzes.get(&revision)?.article(article_key)
    }

    #[must_use]
    pub fn questions(&self, article_key: &str, revision: Revision) -> Option<&[Question]> {
        self.quiz(article_key, revision).map(|q| q.questions.as_slice())
    }

    #[must_use]
    pub fn source_map(&self, article_key: &str, revision: Revision) -> Option<&SourceTypeMap> {
        self.quiz(article_key, revision).map(|q| &q.source_map)
    }

    /// Keyed answers of every article, `article_key -> [correct, ...]`.
    #[must_use]
    pub fn answer_keys(&self, revision: Revision) -> BTreeMap<String, Vec<usize>> {
        self.quizzes
            .get(&revision)
            .map(|quiz| {
                quiz.articles
                    .iter()
                    .map(|a| (a.key.clone(), a.answer_key()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn parse<T: serde::de::DeserializeOwned>(file: &str, raw: &str) -> Result<T, ReferenceError> {
    toml::from_str(raw).map_err(|source| ReferenceError::Parse {
        file: file.to_string(),
        source,
    })
}
