use futures::stream::{self, StreamExt};
use kdam::{Bar, BarExt};
use reqwest::Client;

use super::{RouteReply, RouteService};
use crate::{plan::RouteRequest, CommuteError};

/// sends requests over HTTP with up to `parallelism` requests in flight.
/// replies are collected in request order.
#[derive(Debug, Clone)]
pub struct HttpRouteService {
    client: Client,
    parallelism: usize,
}

impl HttpRouteService {
    pub fn new(parallelism: usize) -> Result<HttpRouteService, CommuteError> {
        let client = Client::builder().build().map_err(|e| {
            CommuteError::InternalError(format!("failure building HTTP client: {e}"))
        })?;
        Ok(HttpRouteService {
            client,
            parallelism: parallelism.max(1),
        })
    }

    async fn send(&self, request: &RouteRequest) -> Result<RouteReply, CommuteError> {
        let url = request.redacted_url();
        log::debug!("GET {url}");
        let response = self
            .client
            .get(&request.endpoint)
            .query(&request.params)
            .send()
            .await
            .map_err(|e| CommuteError::TransportError {
                url: url.clone(),
                message: e.without_url().to_string(),
            })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CommuteError::TransportError {
                url: url.clone(),
                message: e.without_url().to_string(),
            })?;
        Ok(RouteReply {
            token: request.token.clone(),
            url,
            status,
            body,
        })
    }
}

impl RouteService for HttpRouteService {
    fn dispatch(&self, requests: &[RouteRequest]) -> Result<Vec<RouteReply>, CommuteError> {
        if requests.is_empty() {
            return Ok(vec![]);
        }
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                CommuteError::TokioError(format!("failure creating async rust tokio runtime: {e}"))
            })?;
        let mut bar = Bar::builder()
            .total(requests.len())
            .desc("routing requests")
            .build()
            .map_err(|e| CommuteError::InternalError(format!("error building progress bar: {e}")))?;

        // buffered (not buffer_unordered) keeps replies in request order
        let replies = runtime.block_on(
            stream::iter(requests)
                .map(|request| self.send(request))
                .buffered(self.parallelism)
                .inspect(|_| {
                    let _ = bar.update(1);
                })
                .collect::<Vec<_>>(),
        );
        eprintln!();
        replies.into_iter().collect()
    }
}
