use figment::Jail;
use rcl_config::{ConfigError, RecallConfig};
use rcl_core::enums::{DedupPolicy, Revision};
use std::path::PathBuf;

#[test]
fn env_sets_nested_scoring_values() {
    Jail::expect_with(|jail| {
        jail.set_env("RECALL_SCORING__DEDUP_POLICY", "keep_last");
        jail.set_env("RECALL_SCORING__REVISION", "v2");

        let config = RecallConfig::load().expect("config loads");
        assert_eq!(config.scoring.dedup_policy, DedupPolicy::KeepLast);
        assert_eq!(config.scoring.revision, Some(Revision::V2));
        Ok(())
    });
}

#[test]
fn env_sets_data_dir() {
    Jail::expect_with(|jail| {
        jail.set_env("RECALL_DATA__DIR", "/tmp/recall-data");

        let config = RecallConfig::load().expect("config loads");
        assert_eq!(config.data.dir, PathBuf::from("/tmp/recall-data"));
        assert_eq!(
            config.data.participants_path(),
            PathBuf::from("/tmp/recall-data/participants.csv")
        );
        Ok(())
    });
}

#[test]
fn zero_retry_delay_from_env_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("RECALL_LOCK__RETRY_DELAY_MS", "0");

        let err = RecallConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "lock.retry_delay_ms"));
        Ok(())
    });
}
