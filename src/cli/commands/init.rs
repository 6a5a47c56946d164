use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the trip API base URL
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing triplogger…");

    Config::init_all(cli.api.clone(), cli.test)?;

    println!("🎉 triplogger initialization completed!");
    Ok(())
}
