//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::Uri;
use axum::{Extension, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use mortgage_core::{InterestRate, MortgageCheckRequest, MortgageCheckResult};
use mortgage_engine::MortgageService;

use crate::auth::ApiPrincipal;
use crate::error::{ApiError, ApiResult};

/// Application state.
pub struct AppState {
    /// Feasibility service over the loaded rate table
    pub service: MortgageService,
    /// Shared secret checked by the auth middleware
    pub api_token: String,
}

impl AppState {
    /// Create the state shared by all handlers.
    pub fn new(service: MortgageService, api_token: impl Into<String>) -> Self {
        Self {
            service,
            api_token: api_token.into(),
        }
    }
}

/// List all interest rates, in load order.
pub async fn list_interest_rates(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<ApiPrincipal>,
) -> Json<Vec<InterestRate>> {
    info!(principal = principal.subject, "Fetching list of all available interest rates");
    Json(state.service.get_all_rates().to_vec())
}

/// Fallback for paths without a route.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

// =============================================================================
// MORTGAGE CHECK
// =============================================================================

/// Mortgage check body as sent by clients.
///
/// Every field is optional here so that a missing value is reported with its
/// own message instead of a generic deserialization error.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageCheckPayload {
    /// Gross yearly income
    pub income: Option<Decimal>,
    /// Loan term in years
    pub maturity_period: Option<i64>,
    /// Amount to borrow
    pub loan_value: Option<Decimal>,
    /// Value of the home
    pub home_value: Option<Decimal>,
}

impl MortgageCheckPayload {
    /// Validate field by field, in declaration order.
    ///
    /// Returns the first violated constraint as a bad request.
    pub fn validate(&self) -> ApiResult<MortgageCheckRequest> {
        let income = non_negative(self.income, "Income")?;
        let maturity_period = at_least_one_year(self.maturity_period)?;
        let loan_value = non_negative(self.loan_value, "Loan value")?;
        let home_value = non_negative(self.home_value, "Home value")?;

        Ok(MortgageCheckRequest::new(
            income,
            maturity_period,
            loan_value,
            home_value,
        ))
    }
}

fn non_negative(value: Option<Decimal>, field: &str) -> ApiResult<Decimal> {
    let value = value.ok_or_else(|| ApiError::BadRequest(format!("{field} is required")))?;
    if value < Decimal::ZERO {
        return Err(ApiError::BadRequest(format!("{field} cannot be negative")));
    }
    Ok(value)
}

fn at_least_one_year(value: Option<i64>) -> ApiResult<u32> {
    let value =
        value.ok_or_else(|| ApiError::BadRequest("Maturity period is required".to_string()))?;
    if value < 1 {
        return Err(ApiError::BadRequest(
            "Maturity period must be at least 1 year".to_string(),
        ));
    }
    u32::try_from(value)
        .map_err(|_| ApiError::BadRequest("Maturity period is out of range".to_string()))
}

/// Check whether a mortgage is feasible and price its monthly installment.
pub async fn check_mortgage(
    State(state): State<Arc<AppState>>,
    Extension(principal): Extension<ApiPrincipal>,
    payload: Result<Json<MortgageCheckPayload>, JsonRejection>,
) -> ApiResult<Json<MortgageCheckResult>> {
    let Json(payload) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let request = payload.validate()?;

    info!(
        principal = principal.subject,
        maturity_period = request.maturity_period,
        loan_value = %request.loan_value,
        home_value = %request.home_value,
        income = %request.income,
        "Received request for mortgage check"
    );

    Ok(Json(state.service.check_mortgage(&request)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid() -> MortgageCheckPayload {
        MortgageCheckPayload {
            income: Some(dec!(60000)),
            maturity_period: Some(15),
            loan_value: Some(dec!(150000)),
            home_value: Some(dec!(200000)),
        }
    }

    fn message(payload: &MortgageCheckPayload) -> String {
        payload.validate().unwrap_err().to_string()
    }

    #[test]
    fn test_valid_payload() {
        let request = valid().validate().unwrap();
        assert_eq!(
            request,
            MortgageCheckRequest::new(dec!(60000), 15, dec!(150000), dec!(200000))
        );
    }

    #[test]
    fn test_zero_amounts_are_valid() {
        let payload = MortgageCheckPayload {
            income: Some(Decimal::ZERO),
            maturity_period: Some(1),
            loan_value: Some(Decimal::ZERO),
            home_value: Some(Decimal::ZERO),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_required_messages() {
        let cases = [
            (MortgageCheckPayload { income: None, ..valid() }, "Income is required"),
            (
                MortgageCheckPayload { maturity_period: None, ..valid() },
                "Maturity period is required",
            ),
            (MortgageCheckPayload { loan_value: None, ..valid() }, "Loan value is required"),
            (MortgageCheckPayload { home_value: None, ..valid() }, "Home value is required"),
        ];
        for (payload, expected) in cases {
            assert_eq!(message(&payload), expected);
        }
    }

    #[test]
    fn test_bound_messages() {
        let cases = [
            (
                MortgageCheckPayload { income: Some(dec!(-1)), ..valid() },
                "Income cannot be negative",
            ),
            (
                MortgageCheckPayload { maturity_period: Some(0), ..valid() },
                "Maturity period must be at least 1 year",
            ),
            (
                MortgageCheckPayload { loan_value: Some(dec!(-0.01)), ..valid() },
                "Loan value cannot be negative",
            ),
            (
                MortgageCheckPayload { home_value: Some(dec!(-5)), ..valid() },
                "Home value cannot be negative",
            ),
        ];
        for (payload, expected) in cases {
            assert_eq!(message(&payload), expected);
        }
    }

    #[test]
    fn test_first_violation_wins() {
        let payload = MortgageCheckPayload {
            income: None,
            maturity_period: Some(0),
            loan_value: Some(dec!(-1)),
            home_value: None,
        };
        assert_eq!(message(&payload), "Income is required");
    }

    #[test]
    fn test_oversized_period_is_rejected() {
        let payload = MortgageCheckPayload {
            maturity_period: Some(i64::from(u32::MAX) + 1),
            ..valid()
        };
        assert_eq!(message(&payload), "Maturity period is out of range");
    }
}
