use serde::Serialize;

use crate::config::{Feature, Profile};
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
pub struct FeatureStatus {
    pub feature: Feature,
    pub enabled: bool,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let statuses = feature_statuses(&ctx.profile);
    let rows: Vec<_> = statuses
        .iter()
        .map(|status| {
            let state = if status.enabled { "enabled" } else { "disabled" };
            (status.feature.as_str(), state.to_string())
        })
        .collect();
    ctx.output.emit(&rows, &statuses)
}

pub fn feature_statuses(profile: &Profile) -> Vec<FeatureStatus> {
    Feature::KNOWN
        .into_iter()
        .map(|feature| FeatureStatus {
            feature,
            enabled: profile.is_feat_enabled(feature),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{self, AppPaths, ReleaseVersion, Settings};

    fn profile_with(mode: &str, feat: &str, dir: &std::path::Path) -> Profile {
        let settings = Settings {
            mode: mode.to_string(),
            data: ".".to_string(),
            feat: feat.to_string(),
            ..Settings::default()
        };
        config::resolve(settings, &AppPaths::new(dir, dir), &ReleaseVersion)
            .expect("profile should resolve")
    }

    #[test]
    fn lists_every_known_feature_in_order() {
        let root = tempfile::tempdir().expect("tempdir");
        let profile = profile_with("dev", "sso", root.path());

        let statuses = feature_statuses(&profile);
        let pairs: Vec<_> = statuses
            .iter()
            .map(|status| (status.feature, status.enabled))
            .collect();
        assert_eq!(
            pairs,
            [
                (Feature::StorageLocal, false),
                (Feature::Sso, true),
                (Feature::StorageS3, false),
            ]
        );
    }

    #[test]
    fn default_features_enable_everything_outside_prod() {
        let root = tempfile::tempdir().expect("tempdir");
        let profile = profile_with("demo", "", root.path());

        assert!(feature_statuses(&profile).iter().all(|status| status.enabled));
    }

    #[test]
    fn serializes_feature_name_and_state() {
        let root = tempfile::tempdir().expect("tempdir");
        let profile = profile_with("prod", "", root.path());

        let value = serde_json::to_value(feature_statuses(&profile)).expect("should serialize");
        assert_eq!(
            value,
            serde_json::json!([
                {"feature": "STORAGE_LOCAL", "enabled": false},
                {"feature": "SSO", "enabled": false},
                {"feature": "STORAGE_S3", "enabled": false},
            ])
        );
    }
}
