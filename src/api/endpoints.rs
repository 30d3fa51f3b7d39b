//! Remote catalog endpoints and request routing.

use std::collections::BTreeMap;
use std::fmt;

/// Default REST base URL for the catalog API.
pub const DEFAULT_API_BASE_URL: &str = "https://fakestoreapi.com";

/// Context key carried through `web_request` so responses can be routed
/// regardless of arrival order.
pub const CONTEXT_KEY: &str = "endpoint";

/// The two resources fetched at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Products,
    Categories,
}

impl Endpoint {
    /// Both endpoints in request order.
    pub const ALL: [Self; 2] = [Self::Products, Self::Categories];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Products => "/products",
            Self::Categories => "/products/categories",
        }
    }

    /// Resource name used in logs and load failures.
    #[must_use]
    pub const fn resource(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Categories => "categories",
        }
    }

    /// Full request URL for `base_url`.
    ///
    /// ```
    /// use stylehub::api::Endpoint;
    ///
    /// assert_eq!(
    ///     Endpoint::Categories.url("https://fakestoreapi.com/"),
    ///     "https://fakestoreapi.com/products/categories"
    /// );
    /// ```
    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Request context identifying this endpoint.
    #[must_use]
    pub fn context(self) -> BTreeMap<String, String> {
        BTreeMap::from([(CONTEXT_KEY.to_string(), self.resource().to_string())])
    }

    /// Recovers the endpoint from a response context.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(CONTEXT_KEY).map(String::as_str) {
            Some("products") => Some(Self::Products),
            Some("categories") => Some(Self::Categories),
            _ => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        assert_eq!(
            Endpoint::Products.url(DEFAULT_API_BASE_URL),
            "https://fakestoreapi.com/products"
        );
        assert_eq!(
            Endpoint::Products.url("http://localhost:8080//"),
            "http://localhost:8080/products"
        );
    }

    #[test]
    fn context_identifies_endpoint() {
        for endpoint in Endpoint::ALL {
            assert_eq!(Endpoint::from_context(&endpoint.context()), Some(endpoint));
        }
    }

    #[test]
    fn unknown_context_is_rejected() {
        let mut context = BTreeMap::new();
        assert_eq!(Endpoint::from_context(&context), None);

        context.insert(CONTEXT_KEY.to_string(), "carts".to_string());
        assert_eq!(Endpoint::from_context(&context), None);
    }
}
