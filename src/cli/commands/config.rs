//! Show or initialize the configuration

use std::path::Path;

use tourgate::config::Config;
use tourgate::output::{ConfigResult, OperationResult, OutputMode};

/// Print the effective config, or write a default one with `init`
pub fn config(
    explicit: Option<&Path>,
    init: bool,
    force: bool,
    mode: OutputMode,
) -> anyhow::Result<bool> {
    let path = Config::resolve_path(explicit);

    if init {
        if path.exists() && !force {
            OperationResult {
                success: false,
                message: format!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                ),
            }
            .render(mode);
            return Ok(false);
        }

        Config::default().save_to(&path)?;
        OperationResult {
            success: true,
            message: format!("Created {}", path.display()),
        }
        .render(mode);
        return Ok(true);
    }

    let result = ConfigResult {
        path: path.display().to_string(),
        exists: path.exists(),
        config: Config::load_from(&path)?,
    };
    result.render(mode);

    Ok(true)
}
