use crate::model::LogLevelConfig;
use crate::utils::read_config_text;
use env_logger::{Builder, Target};
use log::{error, info, LevelFilter};

pub const LOG_ENV_VAR: &str = "FAULTSIM_LOG";

const LOG_ERROR_LEVEL_MOD: &[&str] = &[
    "hyper_util::server",
    "tower_http",
];

fn get_log_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        // "info" => LevelFilter::Info,
        _ => LevelFilter::Info,
    }
}

fn read_config_log_level(config_file: &str) -> Option<String> {
    let text = read_config_text(config_file).ok().flatten()?;
    serde_yaml::from_str::<LogLevelConfig>(&text)
        .map_err(|e| error!("Failed to parse log config file: {e}"))
        .ok()
        .and_then(|cfg| cfg.log.and_then(|l| l.log_level))
}

/// Splits `debug,faultsim::api=trace` into a default level and per module levels.
fn parse_log_levels(log_level: &str) -> (Option<LevelFilter>, Vec<(String, LevelFilter)>) {
    let mut default_level = None;
    let mut modules = vec![];
    for pair in log_level.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        if pair.contains('=') {
            let mut kv_iter = pair.split('=').map(str::trim);
            if let (Some(module), Some(level)) = (kv_iter.next(), kv_iter.next()) {
                modules.push((module.to_string(), get_log_level(level)));
            }
        } else {
            default_level = Some(get_log_level(pair));
        }
    }
    (default_level, modules)
}

pub fn init_logger(user_log_level: Option<&String>, config_file: &str) {
    let env_log_level = std::env::var(LOG_ENV_VAR).ok();

    let mut log_builder = Builder::from_default_env();
    log_builder.target(Target::Stdout);

    // priority  CLI-Argument, Env-Var, Config, Default
    let log_level = user_log_level
        .map(std::string::ToString::to_string) // cli-argument
        .or(env_log_level) // env
        .or_else(|| read_config_log_level(config_file)) // config
        .unwrap_or_else(|| "info".to_string()); // Default

    for module in LOG_ERROR_LEVEL_MOD {
        log_builder.filter_module(module, LevelFilter::Error);
    }

    let (default_level, modules) = parse_log_levels(&log_level);
    log_builder.filter_level(default_level.unwrap_or(LevelFilter::Info));
    let mut log_levels = vec![default_level.unwrap_or(LevelFilter::Info).to_string()];
    for (module, level) in modules {
        log_levels.push(format!("{module}={level}"));
        log_builder.filter_module(&module, level);
    }
    log_builder.init();
    info!("Log Level {}", &log_levels.join(", "));
}

#[cfg(test)]
mod tests {
    use super::{get_log_level, parse_log_levels};
    use log::LevelFilter;

    #[test]
    fn test_parse_log_levels() {
        assert_eq!(get_log_level("WARN"), LevelFilter::Warn);
        assert_eq!(get_log_level("whatever"), LevelFilter::Info);

        let (default_level, modules) = parse_log_levels("debug, faultsim::api=trace,hyper_util=error");
        assert_eq!(default_level, Some(LevelFilter::Debug));
        assert_eq!(modules, vec![
            ("faultsim::api".to_string(), LevelFilter::Trace),
            ("hyper_util".to_string(), LevelFilter::Error),
        ]);

        let (default_level, modules) = parse_log_levels("faultsim=trace");
        assert_eq!(default_level, None);
        assert_eq!(modules.len(), 1);
    }
}
