// Nomad. Regional pages under /regions/{code}.

use super::{fetch_with_profile, ProviderProfile};
use crate::models::{DataType, Plan};
use reqwest::Client;

pub const PROFILE: ProviderProfile = ProviderProfile {
    name: "Nomad",
    image: "/images/nomad-logo.png",
    card_selectors: ".plan-card, .data-plan",
    data_selectors: ".data-size",
    price_selectors: ".price",
    duration_selectors: "",
    default_data: "N/A",
    default_duration: "30 days",
    data_type: DataType::Combined,
    rating: 4.4,
    reviews: 420,
    features: &["Global coverage", "Flexible plans", "No hidden fees"],
    operators: &["Multiple networks"],
    speed: "Up to 100 Mbps",
    latency: "< 60ms",
    reliability: "99.5%",
};

fn plan_url(country_code: &str) -> String {
    format!(
        "https://www.nomad-esim.com/regions/{}",
        country_code.to_lowercase()
    )
}

pub async fn fetch_plans(client: &Client, country_code: &str, _country_name: &str) -> Vec<Plan> {
    let url = plan_url(country_code);
    fetch_with_profile(client, &PROFILE, &url, country_code).await
}
