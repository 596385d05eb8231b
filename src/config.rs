use std::env;

use getopts::{Matches, Options};
use log::LevelFilter;


#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0}")]
    BadOptions(#[from] getopts::Fail),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}


#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub log_file: Option<String>,
    pub show_help: bool,
}


impl Default for Config {
    fn default() -> Config {
        Config { log_level: LevelFilter::Info, log_file: None, show_help: false }
    }
}


pub fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("l", "log-level", "trace, debug, info, warn or error (default: $LOG_LEVEL, then info)", "LEVEL");
    opts.optopt("f", "log-file", "also append log records to this file", "PATH");
    opts.optflag("h", "help", "print this help and exit");
    opts
}


pub fn usage(program: &str, opts: &Options) -> String {
    let brief = format!("Usage: {} [options]", program);
    opts.usage(&brief)
}


impl Config {
    /// `args` excludes the program name.
    pub fn from_args<I, S>(opts: &Options, args: I) -> Result<Config, ConfigError>
        where I: IntoIterator<Item=S>, S: AsRef<std::ffi::OsStr>
    {
        let matches = opts.parse(args)?;
        if let Some(extra) = matches.free.first() {
            return Err(ConfigError::UnexpectedArgument(extra.clone()));
        }
        Ok(Config::from_matches(&matches, env::var("LOG_LEVEL").ok()))
    }

    fn from_matches(matches: &Matches, env_level: Option<String>) -> Config {
        let level = matches.opt_str("log-level").or(env_level);
        Config {
            log_level: level.as_ref().map_or(LevelFilter::Info, |l| parse_level(l)),
            log_file: matches.opt_str("log-file"),
            show_help: matches.opt_present("help"),
        }
    }
}


pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}


#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use super::{options, parse_level, usage, Config, ConfigError};

    fn matches(args: &[&str]) -> getopts::Matches {
        options().parse(args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_matches(&matches(&[]), None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags() {
        let config = Config::from_matches(
            &matches(&["--log-level", "DEBUG", "-f", "logs/demo.log", "-h"]), None
        );
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file.as_deref(), Some("logs/demo.log"));
        assert!(config.show_help);
    }

    #[test]
    fn test_env_level_is_fallback() {
        let config = Config::from_matches(&matches(&[]), Some("warn".into()));
        assert_eq!(config.log_level, LevelFilter::Warn);

        let config = Config::from_matches(&matches(&["-l", "error"]), Some("warn".into()));
        assert_eq!(config.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        assert_eq!(parse_level("loud"), LevelFilter::Info);
        assert_eq!(parse_level("Trace"), LevelFilter::Trace);
    }

    #[test]
    fn test_bad_options() {
        let opts = options();
        match Config::from_args(&opts, vec!["--bogus"]) {
            Err(ConfigError::BadOptions(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
        match Config::from_args(&opts, vec!["stray"]) {
            Err(ConfigError::UnexpectedArgument(arg)) => assert_eq!(arg, "stray"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_usage_mentions_options() {
        let text = usage("linked-list-demo", &options());
        assert!(text.starts_with("Usage: linked-list-demo [options]"));
        assert!(text.contains("--log-level"));
        assert!(text.contains("--log-file"));
    }
}
