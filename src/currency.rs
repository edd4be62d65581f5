// Display currency conversion. All plan prices are stored in USD; a fixed
// multiplier table covers the handful of currencies the site offers.
// These are not live rates and make no rounding guarantee beyond the
// two-decimal display format.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FiatCurrency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl FiatCurrency {
    // Units of this currency per 1 USD.
    pub fn usd_rate(self) -> f64 {
        match self {
            FiatCurrency::USD => 1.0,
            FiatCurrency::EUR => 0.92,
            FiatCurrency::GBP => 0.79,
            FiatCurrency::CAD => 1.36,
            FiatCurrency::AUD => 1.52,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            FiatCurrency::USD => "$",
            FiatCurrency::EUR => "\u{20AC}",
            FiatCurrency::GBP => "\u{A3}",
            FiatCurrency::CAD => "C$",
            FiatCurrency::AUD => "A$",
        }
    }
}

pub fn convert_from_usd(amount_usd: f64, currency: FiatCurrency) -> f64 {
    amount_usd * currency.usd_rate()
}

pub fn format_currency(amount: f64, currency: FiatCurrency) -> String {
    format!("{}{:.2}", currency.symbol(), amount)
}
