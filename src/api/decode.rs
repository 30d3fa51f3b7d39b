//! Response decoding.
//!
//! Every way a fetch can go wrong (non-2xx status, undecodable body) becomes a
//! [`StyleHubError::LoadFailure`] naming the endpoint's resource.

use super::endpoints::Endpoint;
use crate::domain::error::{Result, StyleHubError};
use crate::domain::Product;

/// Decoded body of a successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Products(Vec<Product>),
    Categories(Vec<String>),
}

/// Decodes a `web_request` result for `endpoint`.
///
/// # Errors
///
/// Returns a load failure when `status` is outside `200..300` or the body is
/// not the JSON array the endpoint serves.
pub fn decode_response(endpoint: Endpoint, status: u16, body: &[u8]) -> Result<Payload> {
    let _span = tracing::debug_span!("decode_response",
        endpoint = %endpoint,
        status,
        body_len = body.len()
    ).entered();

    if !(200..300).contains(&status) {
        return Err(StyleHubError::load_failure(
            endpoint.resource(),
            format!("HTTP status {status}"),
        ));
    }

    let invalid = |e: serde_json::Error| {
        StyleHubError::load_failure(endpoint.resource(), format!("invalid response body: {e}"))
    };

    let payload = match endpoint {
        Endpoint::Products => Payload::Products(serde_json::from_slice(body).map_err(invalid)?),
        Endpoint::Categories => Payload::Categories(serde_json::from_slice(body).map_err(invalid)?),
    };

    tracing::debug!("response decoded");
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCTS: &str = r#"[
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "category": "men's clothing"
        }
    ]"#;

    #[test]
    fn decodes_products() {
        let Payload::Products(products) = decode_response(Endpoint::Products, 200, PRODUCTS.as_bytes()).unwrap() else {
            panic!("expected products");
        };

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].rating.count, 120);
        assert!(products[1].description.is_empty());
    }

    #[test]
    fn decodes_categories() {
        let body = br#"["electronics","jewelery","men's clothing","women's clothing"]"#;
        let payload = decode_response(Endpoint::Categories, 200, body).unwrap();
        assert_eq!(
            payload,
            Payload::Categories(vec![
                "electronics".to_string(),
                "jewelery".to_string(),
                "men's clothing".to_string(),
                "women's clothing".to_string(),
            ])
        );
    }

    #[test]
    fn non_success_status_is_load_failure() {
        let err = decode_response(Endpoint::Categories, 503, b"[]").unwrap_err();
        assert!(err.is_load_failure());
        assert_eq!(err.to_string(), "failed to load categories: HTTP status 503");
    }

    #[test]
    fn malformed_body_is_load_failure() {
        let err = decode_response(Endpoint::Products, 200, b"<html>oops</html>").unwrap_err();
        assert!(err.is_load_failure());
        assert!(err.to_string().starts_with("failed to load products: invalid response body"));
    }

    #[test]
    fn wrong_shape_is_load_failure() {
        let err = decode_response(Endpoint::Categories, 200, PRODUCTS.as_bytes()).unwrap_err();
        assert!(err.is_load_failure());
    }
}
