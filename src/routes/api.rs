// Handlers for the JSON query boundary.

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::{
    countries::{self, Country},
    currency::{convert_from_usd, format_currency, FiatCurrency},
    error::{AppError, AppResult},
    filters,
    models::{
        DataTypeFilter, FilterOptions, Plan, PlansResponse, ScoredPlan, SortKey, SortOrder,
    },
    nlp::{self, ParsedQuery},
    providers, scoring, stats,
};

use crate::AppState;

// Query parameters for /api/esim: the country pair, the full filter
// surface, and an optional display currency.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsimQuery {
    country_code: Option<String>,
    country_name: Option<String>,
    currency: Option<FiatCurrency>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    #[serde(rename = "minDataGB")]
    min_data_gb: Option<f64>,
    #[serde(rename = "maxDataGB")]
    max_data_gb: Option<f64>,
    data_type: Option<DataTypeFilter>,
    #[serde(alias = "minDurationDays")]
    min_duration: Option<u32>,
    max_duration: Option<u32>,
    min_rating: Option<f64>,
    #[serde(rename = "maxPricePerGB")]
    max_price_per_gb: Option<f64>,
    unlimited_only: Option<bool>,
    sort_by: Option<SortKey>,
    sort_order: Option<SortOrder>,
}

impl EsimQuery {
    fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            min_price: self.min_price,
            max_price: self.max_price,
            min_data_gb: self.min_data_gb,
            max_data_gb: self.max_data_gb,
            data_type: self.data_type,
            min_duration: self.min_duration,
            max_duration: self.max_duration,
            min_rating: self.min_rating,
            max_price_per_gb: self.max_price_per_gb,
            unlimited_only: self.unlimited_only,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        }
    }
}

// The filter -> sort -> score composition behind the success envelope.
// Pure over the gathered set so it can be exercised without the network.
fn assemble_response(
    gathered: &[Plan],
    filter_opts: &FilterOptions,
    currency: FiatCurrency,
) -> PlansResponse {
    // Stats describe the whole result set, before the view narrows it.
    let plan_stats = stats::compute_stats(gathered);

    let mut plans = filters::filter_plans(gathered, filter_opts);
    if let Some(sort_by) = filter_opts.sort_by {
        plans = filters::sort_plans(
            &plans,
            sort_by,
            filter_opts.sort_order.unwrap_or(SortOrder::Asc),
        );
    }

    let data: Vec<ScoredPlan> = plans
        .iter()
        .map(|plan| {
            // Scored against the exact list being returned: the value
            // score is contextual, not a plan property.
            let value_score = scoring::value_score(plan, &plans);
            let display_price = (currency != FiatCurrency::USD).then(|| {
                format_currency(convert_from_usd(plan.price, currency), currency)
            });
            ScoredPlan {
                plan: plan.clone(),
                value_score,
                price_per_gb: scoring::price_per_gb(plan),
                display_price,
            }
        })
        .collect();

    PlansResponse {
        success: true,
        data: Some(data),
        stats: plan_stats,
        error: None,
    }
}

pub async fn get_plans(
    State(app_state): State<AppState>,
    Query(query): Query<EsimQuery>,
) -> AppResult<Json<PlansResponse>> {
    let country_code = query
        .country_code
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let country_name = query
        .country_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let (Some(code), Some(name)) = (country_code, country_name) else {
        return Err(AppError::BadRequest(
            "Country code and name are required".to_string(),
        ));
    };

    tracing::info!(code, name, "plan query received");

    // The cascade guarantees a non-empty set unless even the synthetic
    // rung is disabled, so the user never stares at an empty table.
    let gathered = providers::gather_plans(
        &app_state.http_client,
        code,
        name,
        providers::DEFAULT_SOURCES,
    )
    .await;

    let filter_opts = query.filter_options();
    let currency = query.currency.unwrap_or_default();
    Ok(Json(assemble_response(&gathered, &filter_opts, currency)))
}

#[derive(Debug, Deserialize)]
pub struct CountrySearchQuery {
    q: Option<String>,
}

pub async fn search_countries(
    Query(query): Query<CountrySearchQuery>,
) -> Json<Vec<Country>> {
    Json(countries::search_countries(query.q.as_deref().unwrap_or("")))
}

#[derive(Debug, Deserialize)]
pub struct ParseSearchQuery {
    q: Option<String>,
}

pub async fn parse_search(
    Query(query): Query<ParseSearchQuery>,
) -> AppResult<Json<ParsedQuery>> {
    let Some(text) = query.q.as_deref().map(str::trim).filter(|s| !s.is_empty()) else {
        return Err(AppError::BadRequest("Query text is required".to_string()));
    };
    Ok(Json(nlp::parse_query(text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use reqwest::Client;
    use std::sync::Arc;

    use crate::config::Settings;
    use crate::mock;

    fn test_state() -> AppState {
        AppState {
            settings: Arc::new(Settings {
                server_address: "127.0.0.1:3000".to_string(),
                fetch_timeout_secs: 12,
            }),
            http_client: Arc::new(Client::new()),
        }
    }

    #[tokio::test]
    async fn missing_country_is_rejected_with_envelope() {
        // No countryCode/countryName: the handler must refuse before any
        // provider fetch happens.
        let query: EsimQuery = serde_json::from_str("{}").unwrap();
        let err = get_plans(State(test_state()), Query(query))
            .await
            .expect_err("request without a country must fail");
        assert!(matches!(err, AppError::BadRequest(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], serde_json::Value::Bool(false));
        assert!(body["error"].as_str().unwrap().contains("required"));
    }

    #[tokio::test]
    async fn blank_country_is_rejected() {
        let query: EsimQuery =
            serde_json::from_str(r#"{"countryCode": "  ", "countryName": ""}"#).unwrap();
        let err = get_plans(State(test_state()), Query(query))
            .await
            .expect_err("blank country fields must fail");
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn unfiltered_response_is_price_sorted_and_scored_in_context() {
        let gathered = mock::generate_plans("FR", "France");
        let response =
            assemble_response(&gathered, &FilterOptions::default(), FiatCurrency::USD);

        assert!(response.success);
        assert!(response.error.is_none());

        let data = response.data.expect("success envelope carries data");
        assert_eq!(data.len(), gathered.len());
        assert!(data.iter().all(|scored| scored.plan.price > 0.0));
        assert!(data
            .windows(2)
            .all(|pair| pair[0].plan.price <= pair[1].plan.price));

        // Every score is computed against the exact list being returned.
        let returned: Vec<Plan> = data.iter().map(|s| s.plan.clone()).collect();
        for scored in &data {
            assert_eq!(scored.value_score, scoring::value_score(&scored.plan, &returned));
            assert!(scored.display_price.is_none());
        }

        let plan_stats = response.stats.expect("stats cover the gathered set");
        assert_eq!(plan_stats.total_plans, gathered.len());
    }

    #[test]
    fn assemble_response_applies_filters_and_currency() {
        let gathered = mock::generate_plans("DE", "Germany");
        let opts = FilterOptions {
            max_price: Some(30.0),
            sort_by: Some(SortKey::Price),
            sort_order: Some(SortOrder::Desc),
            ..FilterOptions::default()
        };
        let response = assemble_response(&gathered, &opts, FiatCurrency::EUR);

        let data = response.data.unwrap();
        assert!(data.iter().all(|s| s.plan.price <= 30.0));
        assert!(data
            .windows(2)
            .all(|pair| pair[0].plan.price >= pair[1].plan.price));
        assert!(data
            .iter()
            .all(|s| s.display_price.as_deref().is_some_and(|p| p.starts_with('\u{20AC}'))));

        // Stats still describe the whole gathered set, not the narrowed view.
        assert_eq!(response.stats.unwrap().total_plans, gathered.len());
    }

    #[test]
    fn esim_query_maps_onto_filter_options() {
        let query: EsimQuery = serde_json::from_str(
            r#"{
                "countryCode": "FR",
                "countryName": "France",
                "minDurationDays": 7,
                "maxPrice": 40,
                "maxDataGB": 20,
                "sortBy": "valueScore",
                "sortOrder": "desc"
            }"#,
        )
        .unwrap();
        let opts = query.filter_options();
        assert_eq!(opts.min_duration, Some(7));
        assert_eq!(opts.max_price, Some(40.0));
        assert_eq!(opts.max_data_gb, Some(20.0));
        assert_eq!(opts.sort_by, Some(SortKey::ValueScore));
        assert_eq!(opts.sort_order, Some(SortOrder::Desc));
    }
}
