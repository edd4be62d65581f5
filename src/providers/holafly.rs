// Holafly. Mostly unlimited-data plans with a fixed 30-day validity, so
// the profile defaults lean that way when the page omits a field.

use super::{fetch_with_profile, ProviderProfile};
use crate::models::{DataType, Plan};
use reqwest::Client;

pub const PROFILE: ProviderProfile = ProviderProfile {
    name: "Holafly",
    image: "/images/holafly-logo.png",
    card_selectors: ".plan, .package, [data-package]",
    data_selectors: ".data",
    price_selectors: ".price",
    duration_selectors: "",
    default_data: "Unlimited",
    default_duration: "30 days",
    data_type: DataType::Combined,
    rating: 4.7,
    reviews: 890,
    features: &["Unlimited data", "Hotspot included", "No speed limits"],
    operators: &["Multiple networks"],
    speed: "Up to 200 Mbps",
    latency: "< 40ms",
    reliability: "99.8%",
};

fn plan_url(country_code: &str) -> String {
    format!("https://esim.holafly.com/{}", country_code.to_lowercase())
}

pub async fn fetch_plans(client: &Client, country_code: &str, _country_name: &str) -> Vec<Plan> {
    let url = plan_url(country_code);
    fetch_with_profile(client, &PROFILE, &url, country_code).await
}
