//! Central schema registry for every recall record, report, and reference type.
//!
//! The `SchemaRegistry` builds JSON Schemas at construction time using
//! [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use rcl_core::{records, responses, scores};
use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas `rcl` can emit or read.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map as a `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    /// Build a registry with every event-log record, derived score, CLI
    /// response, and reference-data schema.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Event-log records (12) ---
        register!(schemas, "participant_log", records::ParticipantLog);
        register!(schemas, "parse_diagnostics", records::ParseDiagnostics);
        register!(schemas, "demographics", records::Demographics);
        register!(schemas, "prior_knowledge", records::PriorKnowledge);
        register!(schemas, "ai_trust", records::AiTrust);
        register!(schemas, "randomization", records::Randomization);
        register!(schemas, "reading_event", records::ReadingEvent);
        register!(schemas, "summary_viewing", records::SummaryViewing);
        register!(schemas, "recall_response", records::RecallResponse);
        register!(schemas, "mcq_response", records::McqResponse);
        register!(schemas, "post_article_rating", records::PostArticleRating);
        register!(schemas, "manipulation_check", records::ManipulationCheck);

        // --- Scores (3) ---
        register!(schemas, "scorecard", scores::Scorecard);
        register!(schemas, "article_score", scores::ArticleScore);
        register!(schemas, "metrics_report", scores::MetricsReport);

        // --- CLI responses (7) ---
        register!(schemas, "participant_report", responses::ParticipantReport);
        register!(schemas, "dataset_row", responses::DatasetRow);
        register!(
            schemas,
            "dataset_export_response",
            responses::DatasetExportResponse
        );
        register!(schemas, "participant_entry", responses::ParticipantEntry);
        register!(
            schemas,
            "participant_allocation",
            responses::ParticipantAllocation
        );
        register!(schemas, "log_append_response", responses::LogAppendResponse);
        register!(schemas, "key_search_report", responses::KeySearchReport);

        // --- Reference data (5) ---
        register!(schemas, "article", rcl_reference::Article);
        register!(schemas, "question", rcl_reference::Question);
        register!(schemas, "article_quiz", rcl_reference::ArticleQuiz);
        register!(schemas, "source_type_map", rcl_reference::SourceTypeMap);
        register!(schemas, "validation_issue", rcl_reference::ValidationIssue);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
