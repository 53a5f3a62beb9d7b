use super::{RequestPlan, RouteRequest};
use crate::{
    api::{ApiStyle, DirectionsResponse, DistanceMatrixResponse, RouteReply, STATUS_OK},
    model::{CellKey, Direction, DurationCell, DurationTable},
    CommuteError,
};

/// folds the replies of each leg's [`RequestPlan`] into a [`DurationTable`].
/// plans must be folded outbound first; folding is single threaded and follows
/// request order.
#[derive(Debug, Clone)]
pub struct Aggregator {
    table: DurationTable,
}

impl Aggregator {
    pub fn new(n_people: usize) -> Aggregator {
        Aggregator {
            table: DurationTable::new(n_people),
        }
    }

    /// folds one plan's replies into the table. every reply is checked before
    /// any cell is written, so a failed batch leaves the table untouched.
    ///
    /// # Arguments
    /// * `plan` - the requests that were dispatched
    /// * `replies` - one reply per request, in request order
    ///
    /// # Result
    /// fails on a non-success HTTP status, a request-level service status, a
    /// reply that does not answer its request, or a body that does not match
    /// the roster. unroutable elements are recorded as failed cells instead.
    pub fn fold(&mut self, plan: &RequestPlan, replies: &[RouteReply]) -> Result<(), CommuteError> {
        if replies.len() != plan.len() {
            return Err(CommuteError::InternalError(format!(
                "received {} replies for {} {} requests",
                replies.len(),
                plan.len(),
                plan.direction
            )));
        }
        for (request, reply) in plan.requests.iter().zip(replies) {
            if reply.token != request.token {
                return Err(CommuteError::MalformedResponse {
                    url: reply.url.clone(),
                    message: format!(
                        "reply for {} found where {} was expected",
                        reply.token, request.token
                    ),
                });
            }
            if !reply.is_success() {
                return Err(CommuteError::HttpStatus {
                    url: reply.url.clone(),
                    status: reply.status,
                });
            }
        }

        let n_people = self.table.len();
        let decoded = plan
            .requests
            .iter()
            .zip(replies)
            .map(|(request, reply)| decode_reply(request, reply, n_people))
            .collect::<Result<Vec<_>, _>>()?;

        for (request, cells) in plan.requests.iter().zip(decoded) {
            for (person, cell) in cells {
                if let DurationCell::Failed(status) = &cell {
                    log::warn!("no route for person {person}, {}: {status}", request.token);
                }
                let key = CellKey::new(&request.token.slot, request.token.mode);
                self.table.record_leg(person, key, plan.direction, cell)?;
            }
        }
        Ok(())
    }

    pub fn table(&self) -> &DurationTable {
        &self.table
    }

    pub fn finish(self) -> DurationTable {
        self.table
    }
}

fn decode_reply(
    request: &RouteRequest,
    reply: &RouteReply,
    n_people: usize,
) -> Result<Vec<(usize, DurationCell)>, CommuteError> {
    match request.api {
        ApiStyle::Matrix => decode_matrix(request, reply, n_people),
        ApiStyle::Directions => decode_directions(request, reply, n_people),
    }
}

fn malformed(reply: &RouteReply, message: String) -> CommuteError {
    CommuteError::MalformedResponse {
        url: reply.url.clone(),
        message,
    }
}

fn upstream_status(
    reply: &RouteReply,
    status: &str,
    error_message: &Option<String>,
) -> CommuteError {
    let status = match error_message {
        Some(msg) => format!("{status} ({msg})"),
        None => status.to_string(),
    };
    CommuteError::UpstreamStatus {
        url: reply.url.clone(),
        status,
    }
}

/// outbound replies hold one row per person with a single element, return
/// replies hold a single row with one element per person.
fn decode_matrix(
    request: &RouteRequest,
    reply: &RouteReply,
    n_people: usize,
) -> Result<Vec<(usize, DurationCell)>, CommuteError> {
    let body: DistanceMatrixResponse = serde_json::from_str(&reply.body)
        .map_err(|e| malformed(reply, format!("failure decoding distance matrix JSON: {e}")))?;
    if body.status != STATUS_OK {
        return Err(upstream_status(reply, &body.status, &body.error_message));
    }
    let direction = request.token.direction;
    let shape = body.rows.iter().map(|row| row.elements.len()).collect::<Vec<_>>();
    let expected_shape = match direction {
        Direction::ToDestination => vec![1; n_people],
        Direction::FromDestination => vec![n_people],
    };
    if shape != expected_shape {
        return Err(malformed(
            reply,
            format!(
                "{direction} matrix has row lengths {shape:?} but the roster has {n_people} people"
            ),
        ));
    }

    (0..n_people)
        .map(|k| {
            let element = match direction {
                Direction::ToDestination => body.rows.get(k).and_then(|row| row.elements.first()),
                Direction::FromDestination => {
                    body.rows.first().and_then(|row| row.elements.get(k))
                }
            }
            .ok_or_else(|| malformed(reply, format!("no matrix element for person {k}")))?;
            let cell = element
                .duration_cell(request.token.mode)
                .map_err(|e| malformed(reply, format!("person {k}: {e}")))?;
            Ok((k, cell))
        })
        .collect()
}

fn decode_directions(
    request: &RouteRequest,
    reply: &RouteReply,
    n_people: usize,
) -> Result<Vec<(usize, DurationCell)>, CommuteError> {
    let person = match request.token.person {
        Some(p) if p < n_people => p,
        _ => {
            return Err(CommuteError::InternalError(format!(
                "directions request {} does not name a person of the roster",
                request.token
            )))
        }
    };
    let body: DirectionsResponse = serde_json::from_str(&reply.body)
        .map_err(|e| malformed(reply, format!("failure decoding directions JSON: {e}")))?;

    let cell = if body.status == STATUS_OK {
        let leg = body
            .first_leg()
            .ok_or_else(|| malformed(reply, String::from("status OK but no route legs")))?;
        let seconds = leg.durations.select(request.token.mode).ok_or_else(|| {
            malformed(reply, String::from("route leg has no duration"))
        })?;
        DurationCell::Duration(seconds)
    } else if DirectionsResponse::ROUTE_FAILURE_STATUSES.contains(&body.status.as_str()) {
        DurationCell::Failed(body.status.clone())
    } else {
        return Err(upstream_status(reply, &body.status, &body.error_message));
    };
    Ok(vec![(person, cell)])
}
