use std::path::{Path, PathBuf};

use serde::Serialize;

use super::paths::{self, AppPaths};
use super::{Feature, FeatureSet, Mode, ReleaseVersion, Settings, VersionProvider};
use crate::error::AppResult;

/// Startup configuration of the server, resolved once and then shared
/// read-only. Only mode, version and features appear in the serialized view.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    mode: Mode,
    #[serde(skip)]
    port: u16,
    #[serde(skip)]
    data: PathBuf,
    #[serde(skip)]
    dsn: String,
    version: String,
    #[serde(rename = "feature")]
    feat: FeatureSet,
}

impl Profile {
    /// Resolves against the current working directory and executable.
    pub fn resolve(settings: Settings) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        resolve(settings, &paths, &ReleaseVersion)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn data(&self) -> &Path {
        &self.data
    }

    pub fn dsn(&self) -> &str {
        &self.dsn
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn feat(&self) -> &FeatureSet {
        &self.feat
    }

    pub fn is_feat_enabled(&self, feature: Feature) -> bool {
        self.feat.is_enabled(feature)
    }
}

pub fn resolve(
    settings: Settings,
    paths: &AppPaths,
    versions: &dyn VersionProvider,
) -> AppResult<Profile> {
    let Settings {
        mode: raw_mode,
        port,
        data: raw_data,
        feat: raw_feat,
    } = settings;
    tracing::debug!(
        working_dir = %paths.working_dir().display(),
        exe_dir = %paths.exe_dir().display(),
        "resolving profile"
    );

    let mode = Mode::coerce(&raw_mode);
    if mode.as_str() != raw_mode {
        tracing::debug!(requested = %raw_mode, "unrecognized mode, using {mode}");
    }

    let mut feat = FeatureSet::parse(&raw_feat);
    if feat.is_empty() && !mode.is_prod() {
        feat = FeatureSet::All;
    }
    for token in feat.unrecognized() {
        tracing::debug!(token, "unrecognized feature flag");
    }

    let data = if raw_data.is_empty() && mode.is_prod() {
        let default_dir = paths::default_prod_data_dir()?;
        tracing::debug!(data = %default_dir.display(), "using default prod data directory");
        default_dir
    } else {
        PathBuf::from(raw_data)
    };
    let data = paths.absolutize(&data)?;

    if feat.is_enabled(Feature::StorageLocal) {
        let resources = paths::ensure_resources_dir(&data)?;
        tracing::debug!(resources = %resources.display(), "local storage directory ready");
    }

    let data = paths.check_data_dir(&data).inspect_err(|err| {
        tracing::error!(data = %data.display(), "failed to check dsn: {err}");
    })?;

    let dsn = paths::dsn(&data, mode);
    let version = versions.version(mode);

    tracing::info!(
        %mode,
        port,
        data = %data.display(),
        %dsn,
        %version,
        feature = %feat,
        "profile resolved"
    );

    Ok(Profile {
        mode,
        port,
        data,
        dsn,
        version,
        feat,
    })
}
