use clap::{Parser, ValueEnum, ValueHint, value_parser};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use url::Url;

/// Default values used throughout the project.
pub mod defaults {
    /// The default timeout for the site probe, in seconds.
    pub const TIMEOUT: u64 = 10;

    /// Pause between two collectors, in milliseconds.
    pub const DELAY_MS: u64 = 300;

    /// Where reports are written when nothing else is configured.
    pub const OUTPUT_DIR: &str = ".";

    /// Config file picked up from the working directory when `--config` is absent.
    pub const CONFIG_FILE: &str = ".seoprobe.toml";

    /// The default user agent header value used for the site probe.
    pub const USER_AGENT: &str = concat!(
        "Mozilla/5.0 (compatible; Seoprobe/",
        env!("CARGO_PKG_VERSION"),
        ")"
    );
}

/// Accepted site probe timeouts, in seconds.
const TIMEOUT_RANGE: RangeInclusive<u8> = 1..=60;

/// Which collectors a run executes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Indexing, performance, crawl health and technical checks.
    Console,
    /// Brand mentions, keyword rankings, technical checks and content ideas.
    Brand,
    /// Every section.
    #[default]
    Full,
}

impl Profile {
    pub fn includes_console(self) -> bool {
        matches!(self, Profile::Console | Profile::Full)
    }

    pub fn includes_brand(self) -> bool {
        matches!(self, Profile::Brand | Profile::Full)
    }
}

/// Values read from a TOML config file. Every key is optional; anything
/// missing falls back to the built-in site or the CLI defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub site_url: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub pages: Option<Vec<String>>,
    pub brand_variations: Option<Vec<String>>,
    pub brand_name: Option<String>,
    pub primary_keyword: Option<String>,
    pub verification_code: Option<String>,
    pub recommendations: Option<Vec<String>>,
    pub content_ideas: Option<Vec<String>>,
    pub profile: Option<Profile>,
    pub output_dir: Option<String>,
    pub request_timeout: Option<u8>,
    pub delay_ms: Option<u64>,
    pub user_agent: Option<String>,
}

impl ConfigFile {
    /// Loads `path` if given, otherwise `.seoprobe.toml` from the working
    /// directory when it exists. An explicit path that does not exist is an
    /// error; a missing default file is not.
    pub fn load(path: Option<&PathBuf>) -> Result<ConfigFile, String> {
        let path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(format!("Config file not found: {}", p.display()));
                }
                p.clone()
            }
            None => {
                let p = PathBuf::from(defaults::CONFIG_FILE);
                if !p.exists() {
                    return Ok(ConfigFile::default());
                }
                p
            }
        };

        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Could not read config file {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| format!("Invalid config file {}: {}", path.display(), e))?;
        config
            .validate()
            .map_err(|e| format!("Invalid config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Applies the same bounds the command line enforces.
    pub fn validate(&self) -> Result<(), String> {
        match self.request_timeout {
            Some(secs) if !TIMEOUT_RANGE.contains(&secs) => Err(format!(
                "request_timeout = {} is out of range, use {} to {} seconds",
                secs,
                TIMEOUT_RANGE.start(),
                TIMEOUT_RANGE.end()
            )),
            _ => Ok(()),
        }
    }
}

/// Parses a site URL, accepting only http and https.
pub fn parse_site_url(value: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("'{}' is not a valid URL: {}", value, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("Unsupported scheme '{}', use http or https.", other)),
    }
}

#[derive(Debug, Parser)]
#[command(version, about, term_width = 80)]
pub struct Cli {
    #[arg(
        long,
        help = "Print the static SEO checklist and exit. Performs no network access."
    )]
    pub quick: bool,

    #[arg(
        short = 'p',
        long,
        value_enum,
        help = "Which report sections to collect [default: full]"
    )]
    pub profile: Option<Profile>,

    #[arg(
        long,
        help = "Base URL of the site, overrides the configured one",
        value_hint = ValueHint::Url,
        value_parser = parse_site_url
    )]
    pub site_url: Option<Url>,

    #[arg(
        short = 'o',
        long,
        help = "Directory where the JSON report is written [default: .]",
        value_hint = ValueHint::DirPath
    )]
    pub output_dir: Option<String>,

    #[arg(
        short = 't',
        long,
        help = "Timeout (in seconds) for the site availability check [default: 10]",
        value_parser = value_parser!(u8).range(1..=60)
    )]
    pub request_timeout: Option<u8>,

    #[arg(
        long,
        help = "Pause between collectors, in milliseconds [default: 300]"
    )]
    pub delay_ms: Option<u64>,

    #[arg(long, help = "Custom User-Agent header for the site availability check")]
    pub user_agent: Option<String>,

    #[arg(
        long,
        help = "Print the report as JSON to stdout instead of the summary"
    )]
    pub json: bool,

    #[arg(
        long,
        help = "File path for an additional CSV export of the keyword positions",
        value_hint = ValueHint::FilePath,
        value_parser = value_parser!(PathBuf)
    )]
    pub keywords_csv: Option<PathBuf>,

    #[arg(
        short = 'c',
        long,
        help = "Path to a TOML config file [default: ./.seoprobe.toml if present]",
        value_hint = ValueHint::FilePath,
        value_parser = value_parser!(PathBuf)
    )]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Fills every option the command line left unset from the config file.
    pub fn apply_config(&mut self, config: &ConfigFile) {
        if self.profile.is_none() {
            self.profile = config.profile;
        }
        if self.output_dir.is_none() {
            self.output_dir = config.output_dir.clone();
        }
        if self.request_timeout.is_none() {
            self.request_timeout = config.request_timeout;
        }
        if self.delay_ms.is_none() {
            self.delay_ms = config.delay_ms;
        }
        if self.user_agent.is_none() {
            self.user_agent = config.user_agent.clone();
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile.unwrap_or_default()
    }

    /// The output directory with `~` and environment variables expanded.
    pub fn output_dir(&self) -> PathBuf {
        let raw = self.output_dir.as_deref().unwrap_or(defaults::OUTPUT_DIR);
        PathBuf::from(shellexpand::full(raw).map_or_else(|_| raw.into(), |v| v.into_owned()))
    }

    pub fn request_timeout(&self) -> u64 {
        self.request_timeout
            .map_or(defaults::TIMEOUT, |secs| secs as u64)
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms.unwrap_or(defaults::DELAY_MS)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(defaults::USER_AGENT)
    }
}
