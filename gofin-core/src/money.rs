//! Currency and date rendering for display.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::locale::Locale;

/// Renders monetary magnitudes and timestamps according to a [`Locale`].
///
/// Holds no state besides the locale it was built with, so the same input
/// always produces the same string.
#[derive(Debug, Clone, Default)]
pub struct ValueFormatter {
    locale: Locale,
}

impl ValueFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Format a magnitude as currency with exactly two decimals.
    ///
    /// Half cents round away from zero on the decimal value (`1.005` -> `1,01`).
    /// Callers pass non-negative magnitudes; a negative input keeps a leading
    /// `-`. Non-finite or out-of-range input renders as zero.
    pub fn format(&self, amount: f64) -> String {
        // The shortest round-trip text of the float is the decimal the backend sent.
        let rounded = amount
            .to_string()
            .parse::<Decimal>()
            .ok()
            .or_else(|| Decimal::from_f64(amount))
            .unwrap_or(Decimal::ZERO)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let rounded = rounded.abs();
        let whole = rounded.trunc().to_u128().unwrap_or(0);
        let cents = (rounded.fract() * Decimal::ONE_HUNDRED).to_u8().unwrap_or(0);

        format!(
            "{sign}{}{}{}{}{cents:02}",
            self.locale.currency_symbol,
            self.locale.symbol_spacing,
            group_thousands(whole, self.locale.thousands_separator),
            self.locale.decimal_separator,
        )
    }

    /// Calendar date of `timestamp` in the locale's display zone.
    pub fn format_date(&self, timestamp: DateTime<Utc>) -> String {
        timestamp
            .with_timezone(&self.locale.timezone)
            .format(&self.locale.date_format)
            .to_string()
    }
}

fn group_thousands(n: u128, separator: char) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
