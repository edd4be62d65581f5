// Derives numeric facets from the free-text plan fields and computes the
// comparative value score. Everything here is a pure function of its
// arguments: the score depends on the comparison set, so it must be
// recomputed whenever that set changes and is never stored on the Plan.

use crate::models::Plan;
use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel price-per-GB for plans whose data field has no numeric token
/// and is not unlimited. Excluded from max normalization.
pub const UNPARSED_PRICE_PER_GB: f64 = 999.0;

static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)").unwrap());
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)").unwrap());

fn first_decimal(text: &str) -> Option<f64> {
    DECIMAL_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

fn is_unlimited(data: &str) -> bool {
    data.to_lowercase().contains("unlimited")
}

/// Parse the data allowance: first decimal number in the string, else
/// infinity for "unlimited", else 0.
pub fn extract_data_gb(data: &str) -> f64 {
    match first_decimal(data) {
        Some(gb) => gb,
        None if is_unlimited(data) => f64::INFINITY,
        None => 0.0,
    }
}

/// Parse the validity duration: first integer in the string, else 0.
pub fn extract_duration_days(duration: &str) -> u32 {
    INTEGER_RE
        .captures(duration)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Price per gigabyte. Unlimited-without-number plans get 0 ("best
/// possible"), unparseable non-unlimited plans get the 999 sentinel.
pub fn price_per_gb(plan: &Plan) -> f64 {
    match first_decimal(&plan.data) {
        Some(gb) if gb > 0.0 => plan.price / gb,
        Some(_) => 0.0,
        None if is_unlimited(&plan.data) => 0.0,
        None => UNPARSED_PRICE_PER_GB,
    }
}

// Facet used by the data component: numeric token wins, otherwise 0 even
// for unlimited plans (those get the full component via their own branch).
fn data_gb_or_zero(data: &str) -> f64 {
    first_decimal(data).unwrap_or(0.0)
}

/// Value score (0-100) of `plan` relative to `all_plans`. Weighted
/// composite: price 40%, rating 30%, data 20%, duration 10%. An empty
/// comparison set yields the fixed score 50.
pub fn value_score(plan: &Plan, all_plans: &[Plan]) -> u32 {
    if all_plans.is_empty() {
        return 50;
    }

    let ppg = price_per_gb(plan);
    let min_ppg = all_plans
        .iter()
        .map(price_per_gb)
        .filter(|&p| p > 0.0)
        .fold(f64::INFINITY, f64::min);
    let max_ppg = all_plans
        .iter()
        .map(price_per_gb)
        .filter(|&p| p < UNPARSED_PRICE_PER_GB)
        .fold(f64::NEG_INFINITY, f64::max);

    // Inverse-normalized position between min and max; 1 when the spread
    // is degenerate. Clamped so plans carrying the 999 sentinel cannot
    // push the composite outside 0-100.
    let price_score = if max_ppg > min_ppg {
        (1.0 - (ppg - min_ppg) / (max_ppg - min_ppg)).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let rating_score = plan.network_rating / 5.0;

    let max_data = all_plans
        .iter()
        .map(|p| data_gb_or_zero(&p.data))
        .fold(0.0_f64, f64::max);
    let data_score = if is_unlimited(&plan.data) {
        1.0
    } else if max_data > 0.0 {
        (data_gb_or_zero(&plan.data) / max_data).min(1.0)
    } else {
        0.0
    };

    let max_duration = all_plans
        .iter()
        .map(|p| extract_duration_days(&p.duration))
        .max()
        .unwrap_or(0);
    let duration_score = if max_duration > 0 {
        (f64::from(extract_duration_days(&plan.duration)) / f64::from(max_duration)).min(1.0)
    } else {
        0.5
    };

    let total =
        price_score * 0.4 + rating_score * 0.3 + data_score * 0.2 + duration_score * 0.1;
    (total * 100.0).round() as u32
}
