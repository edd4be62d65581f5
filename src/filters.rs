// Filter and sort engine. Pure over its inputs; the caller owns the view
// lifecycle and passes a fresh FilterOptions on every interaction.

use crate::models::{FilterOptions, Plan, SortKey, SortOrder};
use crate::scoring::{extract_data_gb, extract_duration_days, price_per_gb, value_score};
use std::cmp::Ordering;

/// Apply every configured bound in sequence. Unconfigured bounds are
/// no-ops. Unlimited plans are never excluded by an upper data bound, and
/// their price-per-GB of 0 always passes the maxPricePerGB bound.
pub fn filter_plans(plans: &[Plan], filters: &FilterOptions) -> Vec<Plan> {
    let mut filtered: Vec<Plan> = plans.to_vec();

    if let Some(min_price) = filters.min_price {
        filtered.retain(|p| p.price >= min_price);
    }
    if let Some(max_price) = filters.max_price {
        filtered.retain(|p| p.price <= max_price);
    }

    if let Some(min_gb) = filters.min_data_gb {
        filtered.retain(|p| {
            let gb = extract_data_gb(&p.data);
            gb >= min_gb || gb.is_infinite()
        });
    }
    if let Some(max_gb) = filters.max_data_gb {
        filtered.retain(|p| {
            let gb = extract_data_gb(&p.data);
            gb <= max_gb || gb.is_infinite()
        });
    }

    if let Some(data_type) = filters.data_type {
        filtered.retain(|p| data_type.matches(p.data_type));
    }

    if let Some(min_duration) = filters.min_duration {
        filtered.retain(|p| extract_duration_days(&p.duration) >= min_duration);
    }
    if let Some(max_duration) = filters.max_duration {
        filtered.retain(|p| extract_duration_days(&p.duration) <= max_duration);
    }

    if let Some(min_rating) = filters.min_rating {
        filtered.retain(|p| p.network_rating >= min_rating);
    }

    if let Some(max_ppg) = filters.max_price_per_gb {
        filtered.retain(|p| {
            let ppg = price_per_gb(p);
            ppg <= max_ppg || ppg == 0.0
        });
    }

    if filters.unlimited_only == Some(true) {
        filtered.retain(|p| p.data.to_lowercase().contains("unlimited"));
    }

    filtered
}

// Infinite facet values (unlimited data) compare greater than every finite
// value and equal to each other; finite values compare numerically. The
// direction flip for descending happens after this comparison, so
// unlimited sorts last ascending and first descending.
fn compare_facets(a: f64, b: f64) -> Ordering {
    match (a.is_infinite(), b.is_infinite()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Stable sort on the selected facet. Value scores are computed against
/// the list being sorted, never cached.
pub fn sort_plans(plans: &[Plan], sort_by: SortKey, sort_order: SortOrder) -> Vec<Plan> {
    let facets: Vec<f64> = plans
        .iter()
        .map(|p| match sort_by {
            SortKey::Price => p.price,
            SortKey::PricePerGb => price_per_gb(p),
            SortKey::Rating => p.network_rating,
            SortKey::Data => extract_data_gb(&p.data),
            SortKey::Duration => f64::from(extract_duration_days(&p.duration)),
            SortKey::ValueScore => f64::from(value_score(p, plans)),
        })
        .collect();

    let mut order: Vec<usize> = (0..plans.len()).collect();
    order.sort_by(|&a, &b| {
        let cmp = compare_facets(facets[a], facets[b]);
        match sort_order {
            SortOrder::Asc => cmp,
            SortOrder::Desc => cmp.reverse(),
        }
    });

    order.into_iter().map(|i| plans[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataType, DataTypeFilter, NetworkPerformance, Specifications};

    fn plan(provider: &str, data: &str, duration: &str, price: f64, rating: f64) -> Plan {
        Plan {
            id: format!("{}-{}", provider.to_lowercase(), price),
            provider: provider.into(),
            provider_image: "/images/default-provider.svg".into(),
            data: data.into(),
            data_type: DataType::Combined,
            duration: duration.into(),
            price,
            network_rating: rating,
            review_count: 100,
            features: vec![],
            partner_operators: vec![],
            network_performance: NetworkPerformance {
                speed: "Up to 100 Mbps".into(),
                latency: "< 60ms".into(),
                reliability: "99.5%".into(),
            },
            specifications: Specifications {
                activation: "Instant".into(),
                hotspot: "Included".into(),
                tethering: "Yes".into(),
                voice: "Not included".into(),
                sms: "Not included".into(),
            },
        }
    }

    #[test]
    fn no_filters_is_identity() {
        let plans = vec![plan("A", "5 GB", "7 days", 10.0, 4.0)];
        let out = filter_plans(&plans, &FilterOptions::default());
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn max_data_gb_never_excludes_unlimited() {
        let plans = vec![
            plan("A", "10 GB", "30 days", 20.0, 4.5),
            plan("B", "Unlimited", "30 days", 40.0, 4.7),
            plan("C", "3 GB", "7 days", 8.0, 4.2),
        ];
        let out = filter_plans(
            &plans,
            &FilterOptions {
                max_data_gb: Some(5.0),
                ..Default::default()
            },
        );
        let providers: Vec<&str> = out.iter().map(|p| p.provider.as_str()).collect();
        assert_eq!(providers, vec!["B", "C"]);
    }

    #[test]
    fn exact_price_bounds_select_equal_prices_only() {
        let plans = vec![
            plan("A", "5 GB", "7 days", 9.99, 4.0),
            plan("B", "5 GB", "7 days", 10.0, 4.0),
            plan("C", "5 GB", "7 days", 10.01, 4.0),
        ];
        let out = filter_plans(
            &plans,
            &FilterOptions {
                min_price: Some(10.0),
                max_price: Some(10.0),
                ..Default::default()
            },
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].provider, "B");
    }

    #[test]
    fn max_price_per_gb_exempts_unlimited() {
        let plans = vec![
            plan("A", "2 GB", "7 days", 20.0, 4.0), // 10 per GB
            plan("B", "Unlimited", "30 days", 50.0, 4.5), // 0 per GB
        ];
        let out = filter_plans(
            &plans,
            &FilterOptions {
                max_price_per_gb: Some(5.0),
                ..Default::default()
            },
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].provider, "B");
    }

    #[test]
    fn unlimited_only_keeps_unlimited_plans() {
        let plans = vec![
            plan("A", "10 GB", "30 days", 20.0, 4.5),
            plan("B", "Unlimited data", "30 days", 40.0, 4.7),
        ];
        let out = filter_plans(
            &plans,
            &FilterOptions {
                unlimited_only: Some(true),
                ..Default::default()
            },
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].provider, "B");
    }

    #[test]
    fn data_type_all_is_a_no_op() {
        let plans = vec![plan("A", "5 GB", "7 days", 10.0, 4.0)];
        let out = filter_plans(
            &plans,
            &FilterOptions {
                data_type: Some(DataTypeFilter::All),
                ..Default::default()
            },
        );
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn duration_and_rating_bounds_narrow_the_set() {
        let plans = vec![
            plan("A", "5 GB", "7 days", 10.0, 4.0),
            plan("B", "5 GB", "30 days", 15.0, 4.8),
            plan("C", "5 GB", "14 days", 12.0, 3.5),
        ];
        let out = filter_plans(
            &plans,
            &FilterOptions {
                min_duration: Some(10),
                min_rating: Some(4.0),
                ..Default::default()
            },
        );
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].provider, "B");
    }

    #[test]
    fn equal_prices_keep_input_order() {
        let plans = vec![
            plan("First", "5 GB", "7 days", 9.99, 4.0),
            plan("Second", "10 GB", "30 days", 9.99, 4.5),
        ];
        let sorted = sort_plans(&plans, SortKey::Price, SortOrder::Asc);
        assert_eq!(sorted[0].provider, "First");
        assert_eq!(sorted[1].provider, "Second");
    }

    #[test]
    fn descending_reverses_ascending_except_ties() {
        let plans = vec![
            plan("A", "5 GB", "7 days", 12.0, 4.0),
            plan("B", "5 GB", "7 days", 8.0, 4.0),
            plan("C", "5 GB", "7 days", 20.0, 4.0),
        ];
        let asc = sort_plans(&plans, SortKey::Price, SortOrder::Asc);
        let desc = sort_plans(&plans, SortKey::Price, SortOrder::Desc);
        let asc_prices: Vec<f64> = asc.iter().map(|p| p.price).collect();
        let mut desc_prices: Vec<f64> = desc.iter().map(|p| p.price).collect();
        desc_prices.reverse();
        assert_eq!(asc_prices, desc_prices);
    }

    #[test]
    fn unlimited_sorts_after_finite_ascending() {
        let plans = vec![
            plan("B", "Unlimited", "30 days", 40.0, 4.7),
            plan("A", "20 GB", "30 days", 25.0, 4.5),
            plan("C", "5 GB", "7 days", 10.0, 4.0),
        ];
        let sorted = sort_plans(&plans, SortKey::Data, SortOrder::Asc);
        assert_eq!(sorted.last().unwrap().provider, "B");
        assert_eq!(sorted[0].provider, "C");
    }

    #[test]
    fn unlimited_sorts_before_finite_descending() {
        let plans = vec![
            plan("A", "20 GB", "30 days", 25.0, 4.5),
            plan("B", "Unlimited", "30 days", 40.0, 4.7),
        ];
        let sorted = sort_plans(&plans, SortKey::Data, SortOrder::Desc);
        assert_eq!(sorted[0].provider, "B");
    }

    #[test]
    fn value_score_sort_uses_the_sorted_list_as_context() {
        let plans = vec![
            plan("Cheap", "10 GB", "30 days", 10.0, 4.8),
            plan("Pricey", "2 GB", "7 days", 30.0, 3.5),
        ];
        let sorted = sort_plans(&plans, SortKey::ValueScore, SortOrder::Desc);
        assert_eq!(sorted[0].provider, "Cheap");
    }
}
