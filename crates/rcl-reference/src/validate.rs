//! Consistency rules for reference data.

use std::collections::BTreeMap;
use std::fmt;

use rcl_core::enums::Revision;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::quiz::{ArticleQuiz, OPTION_COUNT, QuizRevision};

/// One broken rule, located as precisely as possible.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationIssue {
    pub revision: Option<Revision>,
    pub article_key: String,
    pub question: Option<usize>,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(revision) = self.revision {
            write!(f, "{revision}/")?;
        }
        f.write_str(&self.article_key)?;
        if let Some(question) = self.question {
            write!(f, " q{question}")?;
        }
        write!(f, ": {}", self.message)
    }
}

struct Issues<'a> {
    revision: Revision,
    article_key: &'a str,
    found: &'a mut Vec<ValidationIssue>,
}

impl Issues<'_> {
    fn push(&mut self, question: Option<usize>, message: String) {
        self.found.push(ValidationIssue {
            revision: Some(self.revision),
            article_key: self.article_key.to_string(),
            question,
            message,
        });
    }
}

/// Check a whole quiz revision against the known article keys.
pub(crate) fn check_revision(
    quiz: &QuizRevision,
    article_keys: &[&str],
    found: &mut Vec<ValidationIssue>,
) {
    for key in article_keys {
        if quiz.article(key).is_none() {
            found.push(ValidationIssue {
                revision: Some(quiz.revision),
                article_key: (*key).to_string(),
                question: None,
                message: "article has no questions in this revision".into(),
            });
        }
    }
    for article in &quiz.articles {
        let mut issues = Issues {
            revision: quiz.revision,
            article_key: &article.key,
            found,
        };
        if !article_keys.contains(&article.key.as_str()) {
            issues.push(None, "quiz refers to an unknown article".into());
        }
        check_article(quiz.revision, article, &mut issues);
    }
}

fn check_article(revision: Revision, quiz: &ArticleQuiz, issues: &mut Issues<'_>) {
    let count = quiz.questions.len();
    if count != revision.question_count() {
        issues.push(
            None,
            format!(
                "expected {} questions, found {count}",
                revision.question_count()
            ),
        );
    }

    for (index, question) in quiz.questions.iter().enumerate() {
        if question.options.len() != OPTION_COUNT {
            issues.push(
                Some(index),
                format!(
                    "expected {OPTION_COUNT} options, found {}",
                    question.options.len()
                ),
            );
        }
        if question.correct >= OPTION_COUNT {
            issues.push(
                Some(index),
                format!("correct option {} is out of range", question.correct),
            );
        }
    }

    let mut assigned: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (index, source) in quiz.source_map.entries() {
        assigned
            .entry(index)
            .or_default()
            .push(source.as_str().to_string());
    }
    for (index, sources) in &assigned {
        if *index >= count {
            issues.push(
                Some(*index),
                format!("source map entry beyond the {count} questions"),
            );
        }
        if sources.len() > 1 {
            issues.push(
                Some(*index),
                format!("assigned more than one source type: {}", sources.join(", ")),
            );
        }
    }
    for index in (0..count).filter(|i| !assigned.contains_key(i)) {
        issues.push(Some(index), "question has no source type".into());
    }

    for lure in &quiz.source_map.false_lure {
        if lure.lure >= OPTION_COUNT {
            issues.push(
                Some(lure.question),
                format!("lure option {} is out of range", lure.lure),
            );
        }
        if let Some(question) = quiz.questions.get(lure.question) {
            if question.correct == lure.lure {
                issues.push(
                    Some(lure.question),
                    format!("lure option {} equals the keyed answer", lure.lure),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Question;
    use crate::source_map::{FalseLure, SourceTypeMap};

    fn question(correct: usize) -> Question {
        Question {
            text: "?".into(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
        }
    }

    fn quiz(source_map: SourceTypeMap) -> QuizRevision {
        QuizRevision {
            revision: Revision::V2,
            articles: vec![ArticleQuiz {
                key: "crispr".into(),
                questions: (0..14).map(|_| question(1)).collect(),
                source_map,
            }],
        }
    }

    fn complete_map() -> SourceTypeMap {
        SourceTypeMap {
            article: vec![8, 10, 11, 12],
            ai_summary: vec![0, 1, 3, 4, 5, 6, 7, 9],
            false_lure: vec![
                FalseLure { question: 2, lure: 0 },
                FalseLure { question: 13, lure: 2 },
            ],
        }
    }

    fn check(quiz: &QuizRevision) -> Vec<ValidationIssue> {
        let mut found = Vec::new();
        check_revision(quiz, &["crispr"], &mut found);
        found
    }

    #[test]
    fn complete_partition_passes() {
        assert!(check(&quiz(complete_map())).is_empty());
    }

    #[test]
    fn lure_equal_to_correct_is_reported() {
        let mut map = complete_map();
        map.false_lure[0].lure = 1;
        let issues = check(&quiz(map));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].question, Some(2));
        assert!(issues[0].message.contains("equals the keyed answer"));
    }

    #[test]
    fn missing_and_duplicate_indices_are_reported() {
        let mut map = complete_map();
        map.ai_summary.retain(|&i| i != 9);
        map.article.push(0);
        let issues = check(&quiz(map));
        let questions: Vec<_> = issues.iter().map(|i| i.question).collect();
        assert!(questions.contains(&Some(0)));
        assert!(questions.contains(&Some(9)));
    }

    #[test]
    fn out_of_range_entries_and_options() {
        let mut map = complete_map();
        map.article.push(20);
        let mut quiz = quiz(map);
        quiz.articles[0].questions[3].correct = 4;
        quiz.articles[0].questions[4].options.pop();
        let issues = check(&quiz);
        assert_eq!(issues.len(), 3);
        assert_eq!(
            issues[0].to_string(),
            "v2/crispr q3: correct option 4 is out of range"
        );
    }

    #[test]
    fn unknown_and_missing_articles() {
        let quiz = quiz(complete_map());
        let mut found = Vec::new();
        check_revision(&quiz, &["uhi"], &mut found);
        let messages: Vec<_> = found.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "v2/uhi: article has no questions in this revision".to_string(),
                "v2/crispr: quiz refers to an unknown article".to_string(),
            ]
        );
    }
}
