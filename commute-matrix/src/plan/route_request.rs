use itertools::Itertools;

use super::RequestToken;
use crate::api::ApiStyle;

const API_KEY_PARAM: &str = "key";

/// one planned HTTP GET against the routing service.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub token: RequestToken,
    pub api: ApiStyle,
    pub endpoint: String,
    /// query parameters in the order they are sent
    pub params: Vec<(String, String)>,
}

impl RouteRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// request URL with the api key masked, for logs and error messages.
    pub fn redacted_url(&self) -> String {
        let query = self
            .params
            .iter()
            .map(|(k, v)| {
                if k == API_KEY_PARAM {
                    format!("{k}=REDACTED")
                } else {
                    format!("{k}={v}")
                }
            })
            .join("&");
        format!("{}?{}", self.endpoint, query)
    }
}
