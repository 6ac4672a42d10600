//! Locale settings: currency symbol, separators, date layout and display time zone.

use anyhow::{bail, Result};
use chrono_tz::Tz;

/// Everything the formatters need to know about how a user reads money and dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 style tag this locale was built from ("pt-BR", "en-US")
    pub tag: String,
    pub currency_symbol: String,
    /// Placed between the symbol and the digits ("R$ 10,00" vs "$10.00")
    pub symbol_spacing: String,
    pub decimal_separator: char,
    pub thousands_separator: char,
    /// chrono strftime layout for day/month/year
    pub date_format: String,
    /// Zone used to turn UTC timestamps into calendar dates
    pub timezone: Tz,
}

impl Locale {
    /// Brazilian Portuguese with reais: `R$ 1.234,56`, `05/01/2020`.
    pub fn pt_br() -> Self {
        Self {
            tag: "pt-BR".to_string(),
            currency_symbol: "R$".to_string(),
            symbol_spacing: " ".to_string(),
            decimal_separator: ',',
            thousands_separator: '.',
            date_format: "%d/%m/%Y".to_string(),
            timezone: Tz::UTC,
        }
    }

    /// US English with dollars: `$1,234.56`, `01/05/2020`.
    pub fn en_us() -> Self {
        Self {
            tag: "en-US".to_string(),
            currency_symbol: "$".to_string(),
            symbol_spacing: String::new(),
            decimal_separator: '.',
            thousands_separator: ',',
            date_format: "%m/%d/%Y".to_string(),
            timezone: Tz::UTC,
        }
    }

    /// Look up a preset by tag. Matching ignores case and accepts `_` for `-`.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let normalized = tag.trim().replace('_', "-").to_lowercase();
        match normalized.as_str() {
            "pt-br" => Ok(Self::pt_br()),
            "en-us" => Ok(Self::en_us()),
            _ => bail!("unsupported locale: {tag} (expected pt-BR or en-US)"),
        }
    }

    /// Replace the display time zone with an IANA zone like "America/Sao_Paulo".
    pub fn with_timezone(mut self, tz: &str) -> Result<Self> {
        self.timezone = parse_timezone(tz)?;
        Ok(self)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::pt_br()
    }
}

pub fn parse_timezone(tz: &str) -> Result<Tz> {
    tz.trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))
}
