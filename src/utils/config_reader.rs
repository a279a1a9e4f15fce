use crate::error::{fatal_err, SimError};
use crate::model::Config;
use log::{error, info};
use regex::Regex;
use std::env;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

static RE_ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{env:(?P<var>[a-zA-Z_][a-zA-Z0-9_]*)}").unwrap()
});

pub fn resolve_env_var(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    RE_ENV_VAR.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_else(|e| {
            error!("Could not resolve env var '{var_name}': {e}");
            format!("${{env:{var_name}}}")
        })
    }).to_string()
}

/// Returns the env resolved file content, `None` when the file does not exist.
pub fn read_config_text(config_file: &str) -> Result<Option<String>, SimError> {
    match std::fs::read_to_string(Path::new(config_file)) {
        Ok(content) => Ok(Some(resolve_env_var(&content))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(fatal_err!("Can't read the config file: {config_file}: {err}")),
    }
}

pub fn read_config(config_file: &str) -> Result<Config, SimError> {
    let mut config = match read_config_text(config_file)? {
        Some(text) => serde_yaml::from_str::<Config>(&text)
            .map_err(|err| fatal_err!("Can't parse the config file: {config_file}: {err}"))?,
        None => {
            info!("Config file {config_file} not found, using defaults");
            Config::default()
        }
    };
    config.prepare()?;
    Ok(config)
}
