// Headline figures over the unfiltered result set.

use crate::models::{Plan, PlanStats};
use std::collections::HashSet;

/// None on an empty set; the presentation layer hides the stats bar then.
pub fn compute_stats(plans: &[Plan]) -> Option<PlanStats> {
    if plans.is_empty() {
        return None;
    }
    let min_price = plans.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let max_price = plans
        .iter()
        .map(|p| p.price)
        .fold(f64::NEG_INFINITY, f64::max);
    let avg_price = plans.iter().map(|p| p.price).sum::<f64>() / plans.len() as f64;
    let providers = plans
        .iter()
        .map(|p| p.provider.as_str())
        .collect::<HashSet<_>>()
        .len();
    Some(PlanStats {
        min_price,
        max_price,
        avg_price,
        providers,
        total_plans: plans.len(),
    })
}
