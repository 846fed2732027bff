// src/lambda/mod.rs

//! AWS Lambda handler for the resolver.
//!
//! The function sits behind an HTTP-triggered gateway. The event payload
//! carries nothing the resolver needs, so it is accepted as opaque JSON;
//! configuration comes from environment variables. The response is the
//! proxy-integration shape: `statusCode` plus a JSON-string `body`.

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::error::{AppError, Result};
use crate::fetch::HttpFetcher;
use crate::models::{Config, VideoPick};
use crate::pipeline::run_resolver;

/// Body returned when the pipeline fails; details stay in the logs.
const GENERIC_ERROR_BODY: &str = "Something Went Wrong";

/// Proxy-integration response payload.
#[derive(Debug, Serialize)]
pub struct ProxyResponse {
    /// HTTP status code: 200 on success, 500 on failure
    #[serde(rename = "statusCode")]
    pub status_code: u16,

    /// Serialized JSON body: the pick on success, an error string on
    /// failure
    pub body: String,
}

impl ProxyResponse {
    /// Build the success response around a resolved pick.
    fn ok(pick: &VideoPick) -> Result<Self> {
        Ok(Self {
            status_code: 200,
            body: pick.to_json()?,
        })
    }

    /// Build the generic failure response.
    fn internal_error() -> Self {
        Self {
            status_code: 500,
            body: Value::String(GENERIC_ERROR_BODY.to_string()).to_string(),
        }
    }
}

/// Main Lambda handler function.
#[instrument(skip(event))]
pub async fn handler(
    event: LambdaEvent<Value>,
) -> std::result::Result<ProxyResponse, LambdaError> {
    let (_payload, context) = event.into_parts();
    info!("Resolving a random video (request {})", context.request_id);

    match run_resolve().await {
        Ok(response) => Ok(response),
        Err(e) => {
            error!("Resolution failed: {e}");
            Ok(ProxyResponse::internal_error())
        }
    }
}

/// Internal pipeline logic for the Lambda environment.
async fn run_resolve() -> Result<ProxyResponse> {
    let config = Config::from_env();
    config
        .validate()
        .map_err(|e| AppError::config(format!("Invalid environment configuration: {e}")))?;

    let fetcher = HttpFetcher::new(&config.http)?;
    let pick = run_resolver(&config, &fetcher).await?;

    info!("Resolved '{}' -> {}", pick.title, pick.video);
    ProxyResponse::ok(&pick)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_carries_the_pick() {
        let pick = VideoPick {
            title: "Lateralus".to_string(),
            video: "https://www.youtube.com/watch?v=xyz98765432".to_string(),
        };
        let response = ProxyResponse::ok(&pick).unwrap();
        assert_eq!(response.status_code, 200);

        // The body must round-trip to the pick itself
        let decoded: VideoPick = serde_json::from_str(&response.body).unwrap();
        assert_eq!(decoded, pick);
    }

    #[test]
    fn test_response_serializes_with_gateway_field_names() {
        let pick = VideoPick {
            title: "Schism".to_string(),
            video: "https://www.youtube.com/watch?v=abc12345678".to_string(),
        };
        let value = serde_json::to_value(ProxyResponse::ok(&pick).unwrap()).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert!(value["body"].is_string());
    }

    #[test]
    fn test_error_response_is_generic() {
        let response = ProxyResponse::internal_error();
        assert_eq!(response.status_code, 500);

        // Body is a serialized JSON string, as the gateway contract wants
        let decoded: String = serde_json::from_str(&response.body).unwrap();
        assert_eq!(decoded, "Something Went Wrong");
    }
}
