use anyhow::{Context, Result};
use gofin_client::HttpApi;
use gofin_core::{Locale, ValueFormatter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::{ensure_gofin_home, gofin_home};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub locale: LocaleSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiSection {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocaleSection {
    /// "pt-BR" or "en-US"
    pub tag: String,
    /// IANA zone used to turn timestamps into dates
    pub timezone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogSection {
    /// tracing filter directive, e.g. "warn" or "gofin_client=debug"
    pub level: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3333".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for LocaleSection {
    fn default() -> Self {
        Self {
            tag: "pt-BR".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn value_formatter(&self) -> Result<ValueFormatter> {
        let locale = Locale::from_tag(&self.locale.tag)?
            .with_timezone(&self.locale.timezone)
            .context("locale.timezone")?;
        Ok(ValueFormatter::new(locale))
    }

    pub fn http_api(&self) -> Result<HttpApi> {
        HttpApi::new(&self.api.base_url, Duration::from_secs(self.api.timeout_secs))
            .context("build HTTP client")
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(gofin_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = ensure_gofin_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}
