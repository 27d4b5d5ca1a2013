//! Named records decoded from participant event-log rows.
//!
//! One struct per `phase` layout. Every struct derives `Serialize`,
//! `Deserialize`, and `JsonSchema` so parsed logs can be emitted as JSON and
//! validated against the schema registry. Numeric fields that fail to parse
//! carry the layout's documented default (0, -1, or empty) instead of an error.

mod ai_trust;
mod demographics;
mod log;
mod manipulation;
mod mcq;
mod prior_knowledge;
mod randomization;
mod ratings;
mod reading;
mod recall;
mod summary;

pub use ai_trust::AiTrust;
pub use demographics::Demographics;
pub use log::{DroppedDuplicate, ParseDiagnostics, ParticipantLog};
pub use manipulation::ManipulationCheck;
pub use mcq::{LoggedQuestionOutcome, McqResponse};
pub use prior_knowledge::PriorKnowledge;
pub use randomization::Randomization;
pub use ratings::PostArticleRating;
pub use reading::{OverlayClosed, OverlayOpened, ReadingComplete, ReadingEvent, VisibilityChange};
pub use recall::RecallResponse;
pub use summary::SummaryViewing;
