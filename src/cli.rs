use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::SettingsOverrides;

#[derive(Debug, Parser)]
#[command(name = "memos", version, about = "Resolve the memos server startup profile")]
pub struct Cli {
    #[arg(long, global = true, help = "JSON config file with mode, port, data and feat")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, env = "MEMOS_MODE", help = "Run mode: demo, dev or prod")]
    pub mode: Option<String>,
    #[arg(long, global = true, env = "MEMOS_PORT", help = "Binding port for the server")]
    pub port: Option<u16>,
    #[arg(long, global = true, env = "MEMOS_DATA", help = "Data directory")]
    pub data: Option<String>,
    #[arg(
        long,
        global = true,
        env = "MEMOS_FEAT",
        help = "Comma separated feature flags, or ALL"
    )]
    pub feat: Option<String>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the resolved profile
    Profile,
    /// List known feature flags and whether they are enabled
    Features,
}

impl Cli {
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            mode: self.mode.clone(),
            port: self.port,
            data: self.data.clone(),
            feat: self.feat.clone(),
        }
    }
}
