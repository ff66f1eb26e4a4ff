use crate::error::ConfigError;
use std::path::PathBuf;
use url::Url;

/// Address of the directory backend the app was built against.
pub const DEFAULT_BASE_URL: &str = "http://10.4.42.18:3000";

pub const LOG_FILE_NAME: &str = "sash.log";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    List,
    Power(String),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    pub base_url: Url,
    pub demo: bool,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Where diagnostics go while the interactive screen owns the terminal.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
    }
}

pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(raw.to_string())),
    }
}

// parse_args reads the arguments after the program name; flags may appear in any order
pub fn parse_args(args: &[String]) -> Result<Config, ConfigError> {
    let mut cfg = Config {
        mode: Mode::Interactive,
        base_url: parse_base_url(DEFAULT_BASE_URL)?,
        demo: false,
        log_file: None,
    };
    let mut i = 0usize;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--help" | "-h" => {
                cfg.mode = Mode::Help;
                return Ok(cfg);
            }
            "--list" => cfg.mode = Mode::List,
            "--demo" => cfg.demo = true,
            "--power" => {
                let v = flag_value(args, i, "--power")?;
                cfg.mode = Mode::Power(v.to_string());
                i += 1;
            }
            "--base-url" => {
                let v = flag_value(args, i, "--base-url")?;
                cfg.base_url = parse_base_url(v)?;
                i += 1;
            }
            "--log-file" => {
                let v = flag_value(args, i, "--log-file")?;
                cfg.log_file = Some(PathBuf::from(v));
                i += 1;
            }
            _ => return Err(ConfigError::UnknownArgument(arg.to_string())),
        }
        i += 1;
    }
    Ok(cfg)
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &'static str) -> Result<&'a str, ConfigError> {
    match args.get(i + 1) {
        Some(v) if !v.starts_with("--") => Ok(v.as_str()),
        _ => Err(ConfigError::MissingValue(flag)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_arguments_is_interactive_against_default_host() {
        let cfg = parse_args(&[]).unwrap();
        assert_eq!(cfg.mode, Mode::Interactive);
        assert_eq!(cfg.base_url.as_str(), "http://10.4.42.18:3000/");
        assert!(!cfg.demo);
        assert!(cfg.log_path().ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn flags_in_any_order() {
        let cfg = parse_args(&args(&[
            "--base-url",
            "http://localhost:3000",
            "--power",
            "Super Fuerza",
            "--log-file",
            "/tmp/x.log",
        ]))
        .unwrap();
        assert_eq!(cfg.mode, Mode::Power("Super Fuerza".to_string()));
        assert_eq!(cfg.base_url.host_str(), Some("localhost"));
        assert_eq!(cfg.log_path(), PathBuf::from("/tmp/x.log"));

        let cfg = parse_args(&args(&["--demo", "--list"])).unwrap();
        assert_eq!(cfg.mode, Mode::List);
        assert!(cfg.demo);
    }

    #[test]
    fn help_short_circuits() {
        let cfg = parse_args(&args(&["-h", "--bogus"])).unwrap();
        assert_eq!(cfg.mode, Mode::Help);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            parse_args(&args(&["--power"])),
            Err(ConfigError::MissingValue("--power"))
        ));
        assert!(matches!(
            parse_args(&args(&["--base-url", "--list"])),
            Err(ConfigError::MissingValue("--base-url"))
        ));
        assert!(matches!(
            parse_args(&args(&["--nope"])),
            Err(ConfigError::UnknownArgument(_))
        ));
        assert!(matches!(
            parse_args(&args(&["--base-url", "not a url"])),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            parse_args(&args(&["--base-url", "ftp://host"])),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }
}
