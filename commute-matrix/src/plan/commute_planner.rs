use itertools::Itertools;

use super::{Aggregator, RequestPlan, RequestToken, RouteRequest};
use crate::{
    api::{ApiStyle, RouteService},
    config::CommuteConfiguration,
    model::{Direction, DurationTable, Mode, ModeSelection, Person, TimeSlot},
    CommuteError,
};

const ADDRESS_SEPARATOR: &str = "|";

/// plans, dispatches and aggregates the round trips between a roster and a
/// single destination. the destination, api key and configuration are fixed
/// for the lifetime of the planner.
pub struct CommutePlanner<'a> {
    config: &'a CommuteConfiguration,
    destination: &'a str,
    api_key: &'a str,
    selection: ModeSelection,
}

impl<'a> CommutePlanner<'a> {
    pub fn new(
        config: &'a CommuteConfiguration,
        destination: &'a str,
        api_key: &'a str,
        selection: ModeSelection,
    ) -> CommutePlanner<'a> {
        CommutePlanner {
            config,
            destination,
            api_key,
            selection,
        }
    }

    /// builds the requests for one leg using the configured api.
    pub fn plan(&self, direction: Direction, people: &[Person], slots: &[TimeSlot]) -> RequestPlan {
        match self.config.api {
            ApiStyle::Matrix => self.matrix_plan(direction, people, slots),
            ApiStyle::Directions => self.directions_plan(direction, people, slots),
        }
    }

    /// runs both legs, outbound then return, and returns the summed round
    /// trip durations. any failed batch aborts the run.
    pub fn run<S>(
        &self,
        people: &[Person],
        slots: &[TimeSlot],
        service: &S,
    ) -> Result<DurationTable, CommuteError>
    where
        S: RouteService + ?Sized,
    {
        let mut aggregator = Aggregator::new(people.len());
        if people.is_empty() {
            log::info!("roster is empty, no requests to send");
            return Ok(aggregator.finish());
        }
        for direction in Direction::ALL {
            let plan = self.plan(direction, people, slots);
            log::info!(
                "sending {} {direction} requests for {} people",
                plan.len(),
                people.len()
            );
            let replies = service.dispatch(&plan.requests)?;
            aggregator.fold(&plan, &replies)?;
        }
        Ok(aggregator.finish())
    }

    /// one request per (mode, slot) covering the whole roster, modes in
    /// enumeration order on the outside and slots in generation order inside.
    fn matrix_plan(
        &self,
        direction: Direction,
        people: &[Person],
        slots: &[TimeSlot],
    ) -> RequestPlan {
        let addresses = people.iter().map(|p| p.address.as_str()).join(ADDRESS_SEPARATOR);
        let (origins, destinations) = match direction {
            Direction::ToDestination => (addresses.as_str(), self.destination),
            Direction::FromDestination => (self.destination, addresses.as_str()),
        };
        let mut plan = RequestPlan::new(direction);
        for mode in self.config.planned_modes() {
            for slot in slots.iter() {
                let token = RequestToken {
                    direction,
                    mode,
                    slot: slot.name.clone(),
                    person: None,
                };
                let params = self.params(
                    mode,
                    ("origins", origins),
                    ("destinations", destinations),
                    direction,
                    slot,
                );
                plan.requests.push(self.request(token, params));
            }
        }
        plan
    }

    /// one request per (person, slot) in that person's effective mode.
    fn directions_plan(
        &self,
        direction: Direction,
        people: &[Person],
        slots: &[TimeSlot],
    ) -> RequestPlan {
        let mut plan = RequestPlan::new(direction);
        for (index, person) in people.iter().enumerate() {
            let mode = self.selection.effective_mode(person);
            let (origin, destination) = match direction {
                Direction::ToDestination => (person.address.as_str(), self.destination),
                Direction::FromDestination => (self.destination, person.address.as_str()),
            };
            for slot in slots.iter() {
                let token = RequestToken {
                    direction,
                    mode,
                    slot: slot.name.clone(),
                    person: Some(index),
                };
                let params = self.params(
                    mode,
                    ("origin", origin),
                    ("destination", destination),
                    direction,
                    slot,
                );
                plan.requests.push(self.request(token, params));
            }
        }
        plan
    }

    fn params(
        &self,
        mode: Mode,
        from: (&str, &str),
        to: (&str, &str),
        direction: Direction,
        slot: &TimeSlot,
    ) -> Vec<(String, String)> {
        let (time_name, epoch) = self.config.outbound_anchor.time_param(direction, slot);
        vec![
            (String::from("mode"), mode.to_string()),
            (from.0.to_string(), from.1.to_string()),
            (to.0.to_string(), to.1.to_string()),
            (String::from("key"), self.api_key.to_string()),
            (time_name.to_string(), epoch.to_string()),
        ]
    }

    fn request(&self, token: RequestToken, params: Vec<(String, String)>) -> RouteRequest {
        RouteRequest {
            token,
            api: self.config.api,
            endpoint: self.config.endpoint().to_string(),
            params,
        }
    }
}
