//! Quiz revision resolution.

use rcl_core::enums::{Revision, RevisionSource};
use rcl_core::records::{McqResponse, ParticipantLog};

/// First participant number tested under the revised quiz.
pub const DEFAULT_CUTOVER: u32 = 78;

/// Decides which quiz revision a participant's responses are scored under.
///
/// Rules, first match wins:
///
/// ```text
/// 1. override            explicit --revision / scoring.revision
/// 2. question_count      logged total_questions, logged per-question
///                        accuracy, or highest answered index (15 -> v1, 14 -> v2)
/// 3. participant_cutover P<cutover> and later -> v2, earlier -> v1
/// 4. fallback            v2
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisionPolicy {
    pub override_revision: Option<Revision>,
    pub cutover: u32,
}

impl Default for RevisionPolicy {
    fn default() -> Self {
        Self {
            override_revision: None,
            cutover: DEFAULT_CUTOVER,
        }
    }
}

impl RevisionPolicy {
    #[must_use]
    pub const fn new(override_revision: Option<Revision>, cutover: u32) -> Self {
        Self {
            override_revision,
            cutover,
        }
    }

    /// Pick the revision for `log` and report which rule chose it.
    #[must_use]
    pub fn resolve(&self, log: &ParticipantLog) -> (Revision, RevisionSource) {
        let (revision, source) = self.pick(log);
        tracing::debug!(
            participant = ?log.participant,
            revision = %revision,
            source = %source,
            "resolved quiz revision"
        );
        (revision, source)
    }

    fn pick(&self, log: &ParticipantLog) -> (Revision, RevisionSource) {
        if let Some(revision) = self.override_revision {
            return (revision, RevisionSource::Override);
        }
        if let Some(revision) = log.mcq.iter().find_map(logged_revision) {
            return (revision, RevisionSource::QuestionCount);
        }
        if let Some(participant) = log.participant {
            let revision = if participant.number() >= self.cutover {
                Revision::V2
            } else {
                Revision::V1
            };
            return (revision, RevisionSource::ParticipantCutover);
        }
        (Revision::V2, RevisionSource::Fallback)
    }
}

/// Revision implied by the question count one `mcq_responses` row carries.
fn logged_revision(response: &McqResponse) -> Option<Revision> {
    let logged_total = response
        .logged_total_questions
        .and_then(|total| usize::try_from(total).ok())
        .and_then(Revision::from_question_count);
    logged_total
        .or_else(|| Revision::from_question_count(response.logged_question_accuracy.len()))
        .or_else(|| Revision::from_question_count(response.answered_span()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcl_core::enums::DedupPolicy;
    use rcl_core::ids::ParticipantId;
    use rstest::rstest;
    use std::collections::BTreeMap;

    fn log_with(participant: Option<u32>, mcq: Vec<McqResponse>) -> ParticipantLog {
        let mut log =
            ParticipantLog::empty(participant.map(ParticipantId::new), DedupPolicy::KeepFirst);
        log.mcq = mcq;
        log
    }

    fn answered(span: usize) -> McqResponse {
        McqResponse {
            answers: (0..span).map(|i| (i, 0)).collect::<BTreeMap<_, _>>(),
            ..McqResponse::default()
        }
    }

    #[test]
    fn override_wins_over_everything() {
        let policy = RevisionPolicy::new(Some(Revision::V1), DEFAULT_CUTOVER);
        let log = log_with(Some(200), vec![answered(14)]);
        assert_eq!(policy.resolve(&log), (Revision::V1, RevisionSource::Override));
    }

    #[test]
    fn logged_total_beats_participant_number() {
        let response = McqResponse {
            logged_total_questions: Some(15),
            ..answered(3)
        };
        let log = log_with(Some(120), vec![response]);
        assert_eq!(
            RevisionPolicy::default().resolve(&log),
            (Revision::V1, RevisionSource::QuestionCount)
        );
    }

    #[test]
    fn answered_span_is_a_question_count() {
        let log = log_with(Some(10), vec![answered(14)]);
        assert_eq!(
            RevisionPolicy::default().resolve(&log),
            (Revision::V2, RevisionSource::QuestionCount)
        );
    }

    #[rstest]
    #[case(77, Revision::V1)]
    #[case(78, Revision::V2)]
    #[case(190, Revision::V2)]
    fn cutover_splits_participants(#[case] number: u32, #[case] expected: Revision) {
        // A partial submission says nothing about the quiz length.
        let log = log_with(Some(number), vec![answered(5)]);
        assert_eq!(
            RevisionPolicy::default().resolve(&log),
            (expected, RevisionSource::ParticipantCutover)
        );
    }

    #[test]
    fn unknown_participant_falls_back_to_v2() {
        let log = log_with(None, Vec::new());
        assert_eq!(
            RevisionPolicy::default().resolve(&log),
            (Revision::V2, RevisionSource::Fallback)
        );
    }
}
