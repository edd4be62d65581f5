// Airalo. Country pages live at /{code}-esim; no public machine-readable
// pricing, so this reads the marketing page like a browser would.

use super::{fetch_with_profile, ProviderProfile};
use crate::models::{DataType, Plan};
use reqwest::Client;

pub const PROFILE: ProviderProfile = ProviderProfile {
    name: "Airalo",
    image: "/images/airalo-logo.png",
    card_selectors: ".plan-card, .esim-plan, [data-plan]",
    data_selectors: ".data-amount",
    price_selectors: ".price, .cost",
    duration_selectors: ".duration, .validity",
    default_data: "N/A",
    default_duration: "N/A",
    data_type: DataType::Combined,
    rating: 4.5,
    reviews: 1250,
    features: &["Instant activation", "Hotspot included", "No contract"],
    operators: &["Multiple networks"],
    speed: "Up to 150 Mbps",
    latency: "< 50ms",
    reliability: "99.9%",
};

fn plan_url(country_code: &str) -> String {
    format!("https://www.airalo.com/{}-esim", country_code.to_lowercase())
}

pub async fn fetch_plans(client: &Client, country_code: &str, _country_name: &str) -> Vec<Plan> {
    let url = plan_url(country_code);
    fetch_with_profile(client, &PROFILE, &url, country_code).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_uses_lowercased_country_code() {
        assert_eq!(plan_url("FR"), "https://www.airalo.com/fr-esim");
    }
}
