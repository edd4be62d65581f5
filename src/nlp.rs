// Natural-language search parser. Turns free text like "10 days in France
// for $30" into the structured pieces the country page needs: destination,
// trip length, budget and currency. Best effort; anything it cannot find
// stays None.

use crate::countries::{self, Country};
use crate::currency::FiatCurrency;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    pub country: Option<Country>,
    pub days: Option<u32>,
    pub budget: Option<f64>,
    pub currency: FiatCurrency,
}

// Ordered: the first matching symbol or word wins.
const CURRENCY_HINTS: &[(&str, FiatCurrency)] = &[
    ("$", FiatCurrency::USD),
    ("\u{20AC}", FiatCurrency::EUR),
    ("\u{A3}", FiatCurrency::GBP),
    ("usd", FiatCurrency::USD),
    ("eur", FiatCurrency::EUR),
    ("euro", FiatCurrency::EUR),
    ("gbp", FiatCurrency::GBP),
    ("pound", FiatCurrency::GBP),
    ("cad", FiatCurrency::CAD),
    ("aud", FiatCurrency::AUD),
    ("dollar", FiatCurrency::USD),
];

// Short country aliases matched as standalone tokens only, so "australia"
// cannot trip the "us" alias.
const COUNTRY_ALIASES: &[(&str, &[&str])] = &[
    ("US", &["usa", "us"]),
    ("GB", &["uk", "britain"]),
    ("AE", &["uae"]),
];

static DAY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(\d+)\s*days?",
        r"(?i)for\s+(\d+)\s*days?",
        r"(?i)staying\s+(\d+)\s*days?",
        r"(?i)(\d+)\s*day\s+trip",
        r"(?i)(\d+)\s*day\s+stay",
        r"(?i)duration\s+of\s+(\d+)\s*days?",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Budget patterns paired with the currency the pattern itself implies.
static BUDGET_PATTERNS: Lazy<Vec<(Regex, Option<FiatCurrency>)>> = Lazy::new(|| {
    [
        (r"\$(\d+(?:\.\d+)?)", Some(FiatCurrency::USD)),
        (r"\u{20AC}(\d+(?:\.\d+)?)", Some(FiatCurrency::EUR)),
        (r"\u{A3}(\d+(?:\.\d+)?)", Some(FiatCurrency::GBP)),
        (r"(?i)budget\s+of\s+(\d+(?:\.\d+)?)", None),
        (r"(?i)spending\s+(\d+(?:\.\d+)?)", None),
        (r"(?i)willing\s+to\s+spend\s+(\d+(?:\.\d+)?)", None),
        (r"(?i)spend\s+(\d+(?:\.\d+)?)", None),
        (r"(?i)(\d+(?:\.\d+)?)\s*(?:usd|eur|gbp|cad|aud)", None),
        (r"(?i)up\s+to\s+(\d+(?:\.\d+)?)", None),
        (r"(?i)maximum\s+of\s+(\d+(?:\.\d+)?)", None),
        (r"(?i)max\s+(\d+(?:\.\d+)?)", None),
    ]
    .iter()
    .map(|(p, c)| (Regex::new(p).unwrap(), *c))
    .collect()
});

fn match_country(lower: &str, tokens: &[&str]) -> Option<Country> {
    for country in countries::COUNTRIES {
        let name_lower = country.name.to_lowercase();
        let code_lower = country.code.to_lowercase();
        if lower.contains(&name_lower) || tokens.iter().any(|t| *t == code_lower) {
            return Some(*country);
        }
        if let Some((_, aliases)) = COUNTRY_ALIASES.iter().find(|(c, _)| *c == country.code) {
            if aliases.iter().any(|alias| tokens.contains(alias)) {
                return Some(*country);
            }
        }
    }
    None
}

/// Parse a free-text query. Country is matched in roster order by name
/// substring or standalone code token; days are accepted in 1..=365 and
/// budgets in (0, 10000].
pub fn parse_query(query: &str) -> ParsedQuery {
    let lower = query.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    let country = match_country(&lower, &tokens);

    let mut currency = FiatCurrency::USD;
    for (hint, hinted) in CURRENCY_HINTS {
        if lower.contains(hint) {
            currency = *hinted;
            break;
        }
    }

    let mut days = None;
    for pattern in DAY_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(query) {
            if let Ok(value) = caps[1].parse::<u32>() {
                if (1..=365).contains(&value) {
                    days = Some(value);
                    break;
                }
            }
        }
    }

    let mut budget = None;
    for (pattern, hinted) in BUDGET_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(query) {
            if let Ok(value) = caps[1].parse::<f64>() {
                if value > 0.0 && value <= 10000.0 {
                    budget = Some(value);
                    if let Some(hinted) = hinted {
                        currency = *hinted;
                    }
                    break;
                }
            }
        }
    }

    ParsedQuery {
        country,
        days,
        budget,
        currency,
    }
}
