//! AWS Lambda handler for quote rating
//!
//! Accepts a quote as JSON and returns the base premium, the optimized
//! premium with its adjustment breakdown, and the display range.
//! A GET request returns the factor catalog the quoting UI renders.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::NaiveDate;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use rating_engine::quote::Quote;
use rating_engine::{AdjustmentFactors, PremiumRange, RatingFactors, RatingRunner};
use serde::{Deserialize, Serialize};

/// Input for a rating request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRequest {
    /// The quote to rate
    pub quote: Quote,

    /// Evaluation date; defaults to today when omitted
    #[serde(default)]
    pub evaluation_date: Option<NaiveDate>,

    /// Whether to include the min/max range (default: true)
    #[serde(default = "default_include_range")]
    pub include_range: bool,
}

fn default_include_range() -> bool {
    true
}

/// Output from a rating request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub quote_id: u32,
    pub evaluation_date: NaiveDate,
    pub base_premium: f64,
    pub premium: f64,
    pub base_rate: f64,
    pub adjustments: AdjustmentFactors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_premium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_premium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_premium: Option<f64>,
    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: String) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(body))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Tables ship with the function; fall back to the built-in plan if
    // the data directory is absent from the deployment package
    let factors = RatingFactors::from_csv().unwrap_or_else(|e| {
        log::warn!("Falling back to built-in rating plan: {}", e);
        RatingFactors::default_pricing()
    });

    // GET returns the factor catalog for the quoting UI
    if event.method().as_str() == "GET" {
        let catalog = factors.catalog();
        return Ok(json_response(serde_json::to_string(&catalog).unwrap()));
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: RatingRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let as_of = request
        .evaluation_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let runner = RatingRunner::with_factors(factors);
    let rating = runner.rate(&request.quote, as_of);

    let range: Option<PremiumRange> = request.include_range.then_some(rating.range);

    let response = RatingResponse {
        quote_id: rating.quote_id,
        evaluation_date: as_of,
        base_premium: rating.base.premium,
        premium: rating.optimized.premium,
        base_rate: rating.optimized.base_rate,
        adjustments: rating.optimized.adjustments,
        minimum_premium: range.map(|r| r.minimum_premium),
        maximum_premium: range.map(|r| r.maximum_premium),
        recommended_premium: range.map(|r| r.recommended_premium),
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(json_response(serde_json::to_string(&response).unwrap()))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
