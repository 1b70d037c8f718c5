use super::Mode;

pub const RELEASE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub trait VersionProvider {
    fn version(&self, mode: Mode) -> String;
}

/// Prod reports the release version; demo and dev report a `-dev` build.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseVersion;

impl VersionProvider for ReleaseVersion {
    fn version(&self, mode: Mode) -> String {
        match mode {
            Mode::Prod => RELEASE_VERSION.to_string(),
            Mode::Demo | Mode::Dev => format!("{RELEASE_VERSION}-dev"),
        }
    }
}
