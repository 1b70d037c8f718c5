use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let profile = &ctx.profile;
    let rows = [
        ("mode", profile.mode().to_string()),
        ("version", profile.version().to_string()),
        ("port", profile.port().to_string()),
        ("data", profile.data().display().to_string()),
        ("dsn", profile.dsn().to_string()),
        ("feature", profile.feat().to_string()),
    ];
    ctx.output.emit(&rows, profile)
}
