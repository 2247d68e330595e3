use anyhow::{Context, Result};

use testinfo_validator::config::Config;
use testinfo_validator::output::write_diagnostics;
use testinfo_validator::{ValidationContext, Validator};

fn main() -> Result<()> {
    // Parse configuration from command line and environment
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let mut validator = Validator::new(config.family, &config.schema_dirs)
        .with_context(|| format!("Failed to set up '{}' validator", config.family.name()))?;

    let ctx = ValidationContext::new(&config.base_dir);
    let result = validator.validate_file(&config.file, &ctx)?;

    let stdout = std::io::stdout();
    write_diagnostics(&mut stdout.lock(), &result).context("Failed to write diagnostics")?;

    log::info!(
        "{}: {} findings",
        config.file.display(),
        result.warning_count()
    );

    // Findings never change the exit status.
    Ok(())
}
