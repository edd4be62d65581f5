// Core data structures shared across the plan pipeline and the API boundary.
// Wire names are camelCase to match the frontend contract.

use serde::{Deserialize, Serialize};

// Network generation tag carried by every plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "4G")]
    FourG,
    #[serde(rename = "5G")]
    FiveG,
    #[serde(rename = "4G/5G")]
    Combined,
}

// Display-only performance figures. Never used in any computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPerformance {
    pub speed: String,
    pub latency: String,
    pub reliability: String,
}

// Display-only specification details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    pub activation: String,
    pub hotspot: String,
    pub tethering: String,
    pub voice: String,
    pub sms: String,
}

/// A single eSIM plan as aggregated from a provider (or synthesized).
/// Built once by a fetcher or the generator, never mutated afterwards.
/// `data` and `duration` stay free-text; numeric facets are derived on
/// demand by the scoring module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub provider: String,
    pub provider_image: String,
    pub data: String,
    pub data_type: DataType,
    pub duration: String,
    pub price: f64,
    pub network_rating: f64,
    pub review_count: u32,
    pub features: Vec<String>,
    pub partner_operators: Vec<String>,
    pub network_performance: NetworkPerformance,
    pub specifications: Specifications,
}

// Data-type restriction for filtering. "all" is an explicit no-op so the
// frontend can round-trip its select box value unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataTypeFilter {
    #[serde(rename = "4G")]
    FourG,
    #[serde(rename = "5G")]
    FiveG,
    #[serde(rename = "4G/5G")]
    Combined,
    #[serde(rename = "all")]
    All,
}

impl DataTypeFilter {
    pub fn matches(self, data_type: DataType) -> bool {
        match self {
            DataTypeFilter::FourG => data_type == DataType::FourG,
            DataTypeFilter::FiveG => data_type == DataType::FiveG,
            DataTypeFilter::Combined => data_type == DataType::Combined,
            DataTypeFilter::All => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "price")]
    Price,
    #[serde(rename = "pricePerGB")]
    PricePerGb,
    #[serde(rename = "rating")]
    Rating,
    #[serde(rename = "data")]
    Data,
    #[serde(rename = "duration")]
    Duration,
    #[serde(rename = "valueScore")]
    ValueScore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

/// The active view over a plan list. All fields optional; absence means
/// "no constraint". Replaced wholesale on every user interaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    #[serde(rename = "minDataGB")]
    pub min_data_gb: Option<f64>,
    #[serde(rename = "maxDataGB")]
    pub max_data_gb: Option<f64>,
    pub data_type: Option<DataTypeFilter>,
    // The query boundary historically called this minDurationDays.
    #[serde(alias = "minDurationDays")]
    pub min_duration: Option<u32>,
    pub max_duration: Option<u32>,
    pub min_rating: Option<f64>,
    #[serde(rename = "maxPricePerGB")]
    pub max_price_per_gb: Option<f64>,
    pub unlimited_only: Option<bool>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
}

// Aggregate figures over the unfiltered result set, shown above the list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStats {
    pub min_price: f64,
    pub max_price: f64,
    pub avg_price: f64,
    pub providers: usize,
    pub total_plans: usize,
}

// A plan enriched with the facets the comparison view needs. The value
// score is contextual to the returned set, so it lives here rather than
// on Plan itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPlan {
    #[serde(flatten)]
    pub plan: Plan,
    pub value_score: u32,
    #[serde(rename = "pricePerGB")]
    pub price_per_gb: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_price: Option<String>,
}

/// Success/failure envelope returned by the plans endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlansResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ScoredPlan>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<PlanStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlansResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        PlansResponse {
            success: false,
            data: None,
            stats: None,
            error: Some(error.into()),
        }
    }
}
