use std::path::PathBuf;

use crate::config::{self, Profile, SettingsOverrides};
use crate::error::AppResult;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub profile: Profile,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        config_file: Option<PathBuf>,
        overrides: SettingsOverrides,
        json: bool,
    ) -> AppResult<Self> {
        let settings = config::load_settings(config_file.as_deref(), overrides)?;
        let profile = Profile::resolve(settings)?;
        let output = Output::new(json);

        Ok(Self { profile, output })
    }
}
