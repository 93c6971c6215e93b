use crate::core::client::TransportFailure;
use crate::domain::model::HttpErrorInfo;
use crate::utils::error::GatewayError;

/// Classifies a raw transport failure into the domain error taxonomy.
/// 404 and 422 are the only statuses with dedicated meanings; everything
/// else, including network-level failures, becomes `Unexpected`. Network
/// failures carry status 0 since no downstream status ever existed.
pub fn translate(service: &str, failure: TransportFailure) -> GatewayError {
    match failure {
        TransportFailure::Status { status: 404, body } => {
            GatewayError::NotFound(extract_message(404, &body))
        }
        TransportFailure::Status { status: 422, body } => {
            GatewayError::InvalidInput(extract_message(422, &body))
        }
        TransportFailure::Status { status, body } => {
            tracing::error!(
                "Got an unexpected HTTP error from the {} service: {}, will propagate it",
                service,
                status
            );
            tracing::error!("Error body: {}", body);
            GatewayError::Unexpected {
                status,
                message: extract_message(status, &body),
            }
        }
        TransportFailure::Network { detail } => {
            tracing::error!("The {} service could not be reached: {}", service, detail);
            GatewayError::Unexpected {
                status: 0,
                message: detail,
            }
        }
    }
}

/// Pulls the `message` field out of a structured downstream error body.
/// Parse failures are swallowed: an unparseable body falls back to the raw
/// text, an empty one to the status line. Extraction itself never fails.
fn extract_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<HttpErrorInfo>(body) {
        Ok(info) => info.message.unwrap_or_else(|| fallback_message(status, body)),
        Err(e) => {
            tracing::debug!("Could not parse downstream error body: {}", e);
            fallback_message(status, body)
        }
    }
}

fn fallback_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}
