use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{CalculationDisplay, CalculationResult};
use super::engine::CarbonTaxCalculator;
use super::guard::CalculationRequest;
use super::profile::{province_catalogue, ProvinceSummary};
use super::schedule::{QuarterlyPayment, RebateSchedule};

/// Body returned for a successful calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResponse {
    pub program_year: &'static str,
    pub result: CalculationResult,
    pub display: CalculationDisplay,
    pub quarterly_payments: Vec<QuarterlyPayment>,
}

impl CalculationResponse {
    pub fn new(result: CalculationResult, schedule: &RebateSchedule) -> Self {
        Self {
            program_year: schedule.program_year(),
            display: result.display(),
            quarterly_payments: schedule.payments(result.rebate),
            result,
        }
    }
}

/// Router builder exposing the calculator over HTTP.
pub fn calculator_router(calculator: Arc<CarbonTaxCalculator>) -> Router {
    Router::new()
        .route("/api/v1/carbon-tax/calculate", post(calculate_handler))
        .route("/api/v1/carbon-tax/provinces", get(provinces_handler))
        .with_state(calculator)
}

const REQUEST_FIELDS: [&str; 9] = [
    "province",
    "adults",
    "children",
    "rural",
    "income",
    "gasoline",
    "diesel",
    "natural_gas",
    "propane",
];

/// Request field named by a body rejection, e.g. `adults: invalid value` or
/// ``missing field `province` ``.
fn rejected_field(message: &str) -> Option<&'static str> {
    REQUEST_FIELDS.iter().copied().find(|field| {
        message.contains(&format!(": {field}: ")) || message.contains(&format!("`{field}`"))
    })
}

fn rejection_response(rejection: JsonRejection) -> Response {
    let message = rejection.body_text();
    let payload = json!({
        "error": message,
        "field": rejected_field(&message),
    });
    (rejection.status(), Json(payload)).into_response()
}

pub(crate) async fn calculate_handler(
    State(calculator): State<Arc<CarbonTaxCalculator>>,
    body: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(rejection),
    };

    match calculator.evaluate_request(request) {
        Ok(result) => {
            let schedule = RebateSchedule::program_2023_24();
            let body = CalculationResponse::new(result, &schedule);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) if error.is_validation() => {
            let payload = json!({
                "error": error.to_string(),
                "field": error.field(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn provinces_handler() -> Json<Vec<ProvinceSummary>> {
    Json(province_catalogue())
}
