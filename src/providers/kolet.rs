// Kolet. Destination pages under /en/destinations/{code}.

use super::{fetch_with_profile, ProviderProfile};
use crate::models::{DataType, Plan};
use reqwest::Client;

pub const PROFILE: ProviderProfile = ProviderProfile {
    name: "Kolet",
    image: "/images/kolet-logo.png",
    card_selectors: ".plan-card, .offer-card, [data-offer]",
    data_selectors: ".data, .data-amount",
    price_selectors: ".price, .amount",
    duration_selectors: ".duration, .validity",
    default_data: "N/A",
    default_duration: "30 days",
    data_type: DataType::Combined,
    rating: 4.2,
    reviews: 310,
    features: &["eSIM in seconds", "Fair pricing", "Easy top-up"],
    operators: &["Multiple networks"],
    speed: "Up to 150 Mbps",
    latency: "< 55ms",
    reliability: "99.4%",
};

fn plan_url(country_code: &str) -> String {
    format!(
        "https://www.kolet.com/en/destinations/{}",
        country_code.to_lowercase()
    )
}

pub async fn fetch_plans(client: &Client, country_code: &str, _country_name: &str) -> Vec<Plan> {
    let url = plan_url(country_code);
    fetch_with_profile(client, &PROFILE, &url, country_code).await
}
