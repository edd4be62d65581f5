// Provider fetchers and the aggregation layer.
//
// Every fetcher is best-effort: one GET against an unversioned public
// page, a prioritized list of selector guesses to find plan cards, and an
// empty result on any failure. Failures never cross this boundary as
// errors; one broken provider must not block the others.

use crate::mock;
use crate::models::{DataType, NetworkPerformance, Plan, Specifications};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

pub mod airalo;
pub mod holafly;
pub mod kolet;
pub mod nomad;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{provider} returned status {status}")]
    Status {
        provider: &'static str,
        status: StatusCode,
    },
}

// Everything that varies between providers: where the plan cards live,
// which field names to try, and the fixed comparison metadata shown for
// each plan. Selector strings are comma lists tried in document order.
pub struct ProviderProfile {
    pub name: &'static str,
    pub image: &'static str,
    pub card_selectors: &'static str,
    pub data_selectors: &'static str,
    pub price_selectors: &'static str,
    pub duration_selectors: &'static str,
    pub default_data: &'static str,
    pub default_duration: &'static str,
    pub data_type: DataType,
    pub rating: f64,
    pub reviews: u32,
    pub features: &'static [&'static str],
    pub operators: &'static [&'static str],
    pub speed: &'static str,
    pub latency: &'static str,
    pub reliability: &'static str,
}

impl ProviderProfile {
    fn build_plan(&self, country_code: &str, index: usize, data: String, duration: String, price: f64) -> Plan {
        Plan {
            id: format!("{}-{}-{}", self.name.to_lowercase(), country_code, index),
            provider: self.name.to_string(),
            provider_image: self.image.to_string(),
            data,
            data_type: self.data_type,
            duration,
            price,
            network_rating: self.rating,
            review_count: self.reviews,
            features: self.features.iter().map(|f| f.to_string()).collect(),
            partner_operators: self.operators.iter().map(|o| o.to_string()).collect(),
            network_performance: NetworkPerformance {
                speed: self.speed.to_string(),
                latency: self.latency.to_string(),
                reliability: self.reliability.to_string(),
            },
            specifications: Specifications {
                activation: "Instant".to_string(),
                hotspot: "Included".to_string(),
                tethering: "Yes".to_string(),
                voice: "Not included".to_string(),
                sms: "Not included".to_string(),
            },
        }
    }
}

static CURRENCY_PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[$\u{20AC}\u{A3}]\s*(\d+(?:\.\d+)?)").unwrap());

// First currency-prefixed number anywhere in the body. Backstop for pages
// whose card markup we failed to recognize.
fn scan_for_price(body: &str) -> Option<f64> {
    CURRENCY_PRICE_RE
        .captures(body)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .filter(|&price| price > 0.0)
}

fn select_text(card: ElementRef<'_>, selectors: &str) -> Option<String> {
    let selector = Selector::parse(selectors).ok()?;
    card.select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn parse_price_text(text: &str) -> Option<f64> {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse::<f64>().ok().filter(|&price| price > 0.0)
}

// Locate repeating plan cards and accept each one whose price text parses
// to a number strictly greater than zero; everything else is dropped
// silently because upstream markup is unstable and unversioned.
fn parse_plan_cards(body: &str, profile: &ProviderProfile, country_code: &str) -> Vec<Plan> {
    let document = Html::parse_document(body);
    // Selector lists are compile-time constants; parse cannot fail.
    let card_selector = Selector::parse(profile.card_selectors).unwrap();

    let mut plans = Vec::new();
    for (index, card) in document.select(&card_selector).enumerate() {
        let Some(price) =
            select_text(card, profile.price_selectors).and_then(|t| parse_price_text(&t))
        else {
            continue;
        };
        let data = select_text(card, profile.data_selectors)
            .unwrap_or_else(|| profile.default_data.to_string());
        let duration = if profile.duration_selectors.is_empty() {
            profile.default_duration.to_string()
        } else {
            select_text(card, profile.duration_selectors)
                .unwrap_or_else(|| profile.default_duration.to_string())
        };
        plans.push(profile.build_plan(country_code, index, data, duration, price));
    }
    plans
}

pub(crate) async fn scrape_profile(
    client: &Client,
    profile: &ProviderProfile,
    url: &str,
    country_code: &str,
) -> Result<Vec<Plan>, ProviderError> {
    tracing::debug!(provider = profile.name, url, "fetching provider page");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status {
            provider: profile.name,
            status,
        });
    }
    let body = response.text().await?;

    let mut plans = parse_plan_cards(&body, profile, country_code);
    if plans.is_empty() {
        // No recognizable cards; fall back to the raw price scan.
        if let Some(price) = scan_for_price(&body) {
            tracing::debug!(provider = profile.name, price, "using raw price scan fallback");
            plans.push(profile.build_plan(
                country_code,
                0,
                profile.default_data.to_string(),
                profile.default_duration.to_string(),
                price,
            ));
        }
    }
    Ok(plans)
}

// Logs and swallows: the aggregator only ever sees a plan list.
pub(crate) async fn fetch_with_profile(
    client: &Client,
    profile: &ProviderProfile,
    url: &str,
    country_code: &str,
) -> Vec<Plan> {
    match scrape_profile(client, profile, url, country_code).await {
        Ok(plans) => {
            tracing::debug!(provider = profile.name, count = plans.len(), "scrape finished");
            plans
        }
        Err(e) => {
            tracing::warn!(provider = profile.name, error = %e, "scrape failed, continuing without this provider");
            Vec::new()
        }
    }
}

/// Fan out to every configured provider concurrently, wait for all of
/// them to settle, and merge whatever came back, cheapest first. Partial
/// and total success look the same here; only a fully empty merge matters
/// to the caller.
pub async fn fetch_all_providers(
    client: &Client,
    country_code: &str,
    country_name: &str,
) -> Vec<Plan> {
    let (airalo, holafly, nomad, kolet) = futures::join!(
        airalo::fetch_plans(client, country_code, country_name),
        holafly::fetch_plans(client, country_code, country_name),
        nomad::fetch_plans(client, country_code, country_name),
        kolet::fetch_plans(client, country_code, country_name),
    );

    let mut plans = airalo;
    plans.extend(holafly);
    plans.extend(nomad);
    plans.extend(kolet);
    plans.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(std::cmp::Ordering::Equal));
    tracing::info!(count = plans.len(), country_code, "aggregated provider plans");
    plans
}

/// A rung of the data-source cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    LiveScrape,
    Synthetic,
}

/// Production cascade: real data first, synthetic catalog when every
/// provider came back empty.
pub const DEFAULT_SOURCES: &[PlanSource] = &[PlanSource::LiveScrape, PlanSource::Synthetic];

/// Walk the source cascade in order and return the first non-empty
/// result. The order is plain data, so tests can run a single rung or
/// none at all.
pub async fn gather_plans(
    client: &Client,
    country_code: &str,
    country_name: &str,
    sources: &[PlanSource],
) -> Vec<Plan> {
    for source in sources {
        let plans = match source {
            PlanSource::LiveScrape => {
                fetch_all_providers(client, country_code, country_name).await
            }
            PlanSource::Synthetic => mock::generate_plans(country_code, country_name),
        };
        if !plans.is_empty() {
            return plans;
        }
        tracing::warn!(?source, country_code, "source yielded no plans, falling through");
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIRALO_FIXTURE: &str = r#"
        <html><body>
          <div class="plan-card">
            <span class="data-amount">5 GB</span>
            <span class="price">$11.50</span>
            <span class="validity">30 days</span>
          </div>
          <div class="esim-plan">
            <span class="data-amount">10 GB</span>
            <span class="cost">$19.00</span>
            <span class="duration">30 days</span>
          </div>
          <div class="plan-card">
            <span class="data-amount">1 GB</span>
            <span class="price">Free</span>
          </div>
        </body></html>
    "#;

    #[test]
    fn accepts_only_cards_with_positive_prices() {
        let plans = parse_plan_cards(AIRALO_FIXTURE, &airalo::PROFILE, "FR");
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].data, "5 GB");
        assert_eq!(plans[0].price, 11.5);
        assert_eq!(plans[1].price, 19.0);
        assert_eq!(plans[0].provider, "Airalo");
    }

    #[test]
    fn missing_fields_fall_back_to_profile_defaults() {
        let body = r#"<div class="plan-card"><span class="price">$9</span></div>"#;
        let plans = parse_plan_cards(body, &airalo::PROFILE, "JP");
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].data, airalo::PROFILE.default_data);
        assert_eq!(plans[0].duration, airalo::PROFILE.default_duration);
    }

    #[test]
    fn raw_scan_finds_currency_prefixed_numbers() {
        assert_eq!(scan_for_price("plans from $12.99 per month"), Some(12.99));
        assert_eq!(scan_for_price("\u{20AC} 24 for travelers"), Some(24.0));
        assert_eq!(scan_for_price("no prices here"), None);
        assert_eq!(scan_for_price("$0 down"), None);
    }

    #[test]
    fn price_text_parsing_strips_decorations() {
        assert_eq!(parse_price_text("$19.99"), Some(19.99));
        assert_eq!(parse_price_text("USD 25"), Some(25.0));
        assert_eq!(parse_price_text("Free"), None);
        assert_eq!(parse_price_text("$0.00"), None);
    }

    #[tokio::test]
    async fn synthetic_rung_always_produces_plans() {
        let client = Client::new();
        let plans = gather_plans(&client, "FR", "France", &[PlanSource::Synthetic]).await;
        assert!(!plans.is_empty());
        assert!(plans.iter().all(|p| p.price > 0.0));
    }

    #[tokio::test]
    async fn empty_cascade_yields_empty_result() {
        let client = Client::new();
        let plans = gather_plans(&client, "FR", "France", &[]).await;
        assert!(plans.is_empty());
    }
}
