//! Resolution of repeated `mcq_responses` rows.

use std::collections::HashMap;

use rcl_core::enums::DedupPolicy;
use rcl_core::records::{DroppedDuplicate, McqResponse};

/// Rows for the same article share this key, compared trimmed and
/// case-insensitively. Rows with a blank article key fall back to their
/// position number.
fn dedup_key(response: &McqResponse) -> String {
    let key = response.article_key.trim().to_ascii_lowercase();
    if key.is_empty() {
        format!("#{}", response.article_num)
    } else {
        key
    }
}

/// Keep one row per article under `policy`.
///
/// Kept rows are returned in order of each article's first appearance,
/// together with a record of every row dropped.
pub fn dedup_mcq(
    responses: Vec<McqResponse>,
    policy: DedupPolicy,
) -> (Vec<McqResponse>, Vec<DroppedDuplicate>) {
    let mut kept: Vec<McqResponse> = Vec::with_capacity(responses.len());
    let mut slot_by_key: HashMap<String, usize> = HashMap::new();
    let mut dropped = Vec::new();

    for response in responses {
        let key = dedup_key(&response);
        let Some(&slot) = slot_by_key.get(&key) else {
            slot_by_key.insert(key, kept.len());
            kept.push(response);
            continue;
        };

        let (survivor, loser) = match policy {
            DedupPolicy::KeepFirst => (&kept[slot], response),
            DedupPolicy::KeepLast => {
                let previous = std::mem::replace(&mut kept[slot], response);
                (&kept[slot], previous)
            }
        };
        tracing::warn!(
            article = %key,
            policy = %policy,
            kept = %survivor.timestamp,
            dropped = %loser.timestamp,
            "duplicate mcq_responses row dropped"
        );
        dropped.push(DroppedDuplicate {
            article_key: key,
            kept_timestamp: survivor.timestamp.clone(),
            dropped_timestamp: loser.timestamp,
        });
    }

    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn response(ts: &str, key: &str, first_answer: usize) -> McqResponse {
        McqResponse {
            timestamp: ts.into(),
            article_key: key.into(),
            answers: BTreeMap::from([(0, first_answer)]),
            ..McqResponse::default()
        }
    }

    fn rows() -> Vec<McqResponse> {
        vec![
            response("2025-11-03T10:00:00", "uhi", 1),
            response("2025-11-03T10:10:00", "crispr", 0),
            response("2025-11-03T10:10:02", "crispr", 3),
            response("2025-11-03T10:20:00", "semiconductors", 2),
        ]
    }

    #[test]
    fn keep_first_preserves_first_occurrence() {
        let (kept, dropped) = dedup_mcq(rows(), DedupPolicy::KeepFirst);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[1].selected(0), Some(0));
        assert_eq!(
            dropped,
            vec![DroppedDuplicate {
                article_key: "crispr".into(),
                kept_timestamp: "2025-11-03T10:10:00".into(),
                dropped_timestamp: "2025-11-03T10:10:02".into(),
            }]
        );
    }

    #[test]
    fn keep_last_takes_latest_row() {
        let (kept, dropped) = dedup_mcq(rows(), DedupPolicy::KeepLast);
        let keys: Vec<_> = kept.iter().map(|r| r.article_key.as_str()).collect();
        assert_eq!(keys, vec!["uhi", "crispr", "semiconductors"]);
        assert_eq!(kept[1].selected(0), Some(3));
        assert_eq!(dropped[0].kept_timestamp, "2025-11-03T10:10:02");
        assert_eq!(dropped[0].dropped_timestamp, "2025-11-03T10:10:00");
    }

    #[test]
    fn blank_keys_dedup_by_position() {
        let mut a = response("t1", "", 0);
        a.article_num = 0;
        let mut b = response("t2", "", 1);
        b.article_num = 1;
        let (kept, dropped) = dedup_mcq(vec![a, b], DedupPolicy::KeepFirst);
        assert_eq!(kept.len(), 2);
        assert!(dropped.is_empty());
    }

    #[test]
    fn keys_differing_in_case_are_duplicates() {
        let rows = vec![
            response("t1", "crispr", 0),
            response("t2", " CRISPR ", 3),
        ];
        let (kept, dropped) = dedup_mcq(rows, DedupPolicy::KeepFirst);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].article_key, "crispr");
        assert_eq!(dropped[0].article_key, "crispr");
        assert_eq!(dropped[0].dropped_timestamp, "t2");
    }
}
