use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub weight: i32,
    /// Which downstream instance actually answered. Diagnostic only, filled
    /// in by the owning service, never fabricated here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub product_id: i32,
    pub recommendation_id: i32,
    pub author: String,
    pub rating: i32,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub product_id: i32,
    pub review_id: i32,
    pub author: String,
    pub subject: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_address: Option<String>,
}

/// Error body the downstream services attach to non-2xx responses. Only
/// `message` is read during translation; every field is optional so partial
/// or truncated bodies still parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpErrorInfo {
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_field_names_are_camel_case() {
        let product = Product {
            product_id: 13,
            name: "widget".to_string(),
            weight: 120,
            service_address: Some("host-1/10.0.0.5:7001".to_string()),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["productId"], 13);
        assert_eq!(json["name"], "widget");
        assert_eq!(json["weight"], 120);
        assert_eq!(json["serviceAddress"], "host-1/10.0.0.5:7001");
    }

    #[test]
    fn test_entities_decode_without_service_address() {
        let product: Product =
            serde_json::from_str(r#"{"productId":1,"name":"widget","weight":5}"#).unwrap();
        assert_eq!(product.product_id, 1);
        assert!(product.service_address.is_none());

        let recommendation: Recommendation = serde_json::from_str(
            r#"{"productId":1,"recommendationId":2,"author":"ann","rating":4,"content":"good"}"#,
        )
        .unwrap();
        assert_eq!(recommendation.rating, 4);

        let review: Review = serde_json::from_str(
            r#"{"productId":1,"reviewId":3,"author":"bob","subject":"ok","content":"fine"}"#,
        )
        .unwrap();
        assert_eq!(review.review_id, 3);
    }

    #[test]
    fn test_http_error_info_parses_partial_bodies() {
        let info: HttpErrorInfo =
            serde_json::from_str(r#"{"message":"No product found for productId: 13"}"#).unwrap();
        assert_eq!(
            info.message.as_deref(),
            Some("No product found for productId: 13")
        );
        assert!(info.timestamp.is_none());

        let info: HttpErrorInfo = serde_json::from_str(
            r#"{"timestamp":"2026-08-06T10:15:30Z","path":"/product/13","message":"gone","status":404}"#,
        )
        .unwrap();
        assert_eq!(info.status, Some(404));
        assert_eq!(info.path.as_deref(), Some("/product/13"));
    }
}
