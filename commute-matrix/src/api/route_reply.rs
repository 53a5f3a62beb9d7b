use crate::plan::RequestToken;

/// raw answer to one [`crate::plan::RouteRequest`].
#[derive(Debug, Clone)]
pub struct RouteReply {
    pub token: RequestToken,
    /// request URL with the api key redacted
    pub url: String,
    /// HTTP status code
    pub status: u16,
    pub body: String,
}

impl RouteReply {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}
