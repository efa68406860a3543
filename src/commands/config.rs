//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get` / `config set`: Read or change a single key
//! - `config path`: Print where the config file lives

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{Config, ENDPOINT_ENV};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path();
    let endpoint = config.endpoint();
    let overridden = endpoint != config.endpoint;

    let json_output = json!({
        "endpoint": endpoint,
        "endpoint_from_env": overridden,
        "request_timeout": config.request_timeout,
        "config_file": path.to_string_lossy(),
    });

    let mut text = format!("{}\n\n", "Configuration:".cyan().bold());
    text.push_str(&format!("{}: {}", "endpoint".cyan(), endpoint));
    if overridden {
        text.push_str(&format!(" {}", format!("(from {ENDPOINT_ENV})").dimmed()));
    }
    text.push('\n');
    text.push_str(&format!(
        "{}: {}s\n\n",
        "request_timeout".cyan(),
        config.request_timeout
    ));
    text.push_str(&format!(
        "{}",
        format!("Config file: {}", path.display()).dimmed()
    ));

    CommandOutput::new(json_output).with_text(text).print(json)
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get(key)?);
    Ok(())
}

/// Set a configuration value and save
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    tracing::info!(key, value, "config updated");
    println!("Set {} to {}", key.cyan(), value);
    Ok(())
}

/// Print the config file location
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_guards::IsolatedConfig;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_set_persists() {
        let isolated = unsafe { IsolatedConfig::new() }.unwrap();

        cmd_config_set("request_timeout", "7").unwrap();
        assert!(isolated.config_path().exists());
        assert_eq!(Config::load().unwrap().request_timeout, 7);
    }

    #[test]
    #[serial]
    fn test_config_set_rejects_bad_value_without_writing() {
        let isolated = unsafe { IsolatedConfig::new() }.unwrap();

        assert!(cmd_config_set("endpoint", "mailto:someone").is_err());
        assert!(!isolated.config_path().exists());
        assert!(cmd_config_get("colour").is_err());
    }
}
