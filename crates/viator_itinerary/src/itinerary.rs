use jiff::SignedDuration;
use smallvec::SmallVec;
use tracing::{Level, debug, instrument};
use viator_tour::{location::Location, matrix::DistanceMatrix, tour::nearest_neighbor_tour};

use crate::{error::ItineraryError, milestone::Milestone, route::Route};

pub const MIN_STOPS: usize = 3;
pub const MAX_STOPS: usize = 10;

/// Size bounds for a usable trip. Additions stop at `max_stops`; removals
/// stop once the itinerary is down to `min_stops`.
#[derive(Debug, Clone, Copy)]
pub struct ItineraryLimits {
    pub min_stops: usize,
    pub max_stops: usize,
}

impl Default for ItineraryLimits {
    fn default() -> Self {
        ItineraryLimits {
            min_stops: MIN_STOPS,
            max_stops: MAX_STOPS,
        }
    }
}

type Milestones = SmallVec<[Milestone; MAX_STOPS]>;

/// The authoritative ordered milestone list.
///
/// Invariants, restored after every successful mutation:
/// - no two milestones share an id,
/// - `order` values are exactly `1..=len`, matching sequence position,
/// - the list never exceeds `limits.max_stops` and `remove` never takes it
///   below `limits.min_stops`.
///
/// Every rejected operation leaves the list untouched.
#[derive(Debug, Clone, Default)]
pub struct Itinerary {
    milestones: Milestones,
    limits: ItineraryLimits,
}

impl Itinerary {
    pub fn new() -> Self {
        Itinerary::default()
    }

    pub fn with_limits(limits: ItineraryLimits) -> Self {
        Itinerary {
            milestones: SmallVec::new(),
            limits,
        }
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.milestones.iter().any(|milestone| milestone.id() == id)
    }

    /// Appends an accepted candidate at the end of the visiting sequence.
    ///
    /// The stored milestone gets `order = len + 1` and `completed = false`
    /// no matter what the candidate carried; both fields are assigned here,
    /// never trusted from input. The returned reference is also the signal
    /// on which the presentation layer drops its transient search results.
    pub fn add(&mut self, candidate: Milestone) -> Result<&Milestone, ItineraryError> {
        if self.milestones.len() >= self.limits.max_stops {
            return Err(ItineraryError::LimitExceeded {
                max: self.limits.max_stops,
            });
        }

        if self.contains(candidate.id()) {
            return Err(ItineraryError::DuplicateEntry {
                id: candidate.id().to_owned(),
            });
        }

        let order = self.milestones.len() as u32 + 1;
        self.milestones.push(candidate.accepted(order));

        let stored = &self.milestones[self.milestones.len() - 1];
        debug!(id = stored.id(), order, "milestone added");

        Ok(stored)
    }

    /// Removes a milestone by id and renumbers the remainder.
    ///
    /// Fails with `MinimumRequired` whenever the itinerary is at or below
    /// its floor, before the id is even looked up. An id that is not
    /// present is a no-op success (`Ok(None)`).
    pub fn remove(&mut self, id: &str) -> Result<Option<Milestone>, ItineraryError> {
        if self.milestones.len() <= self.limits.min_stops {
            return Err(ItineraryError::MinimumRequired {
                min: self.limits.min_stops,
            });
        }

        let Some(position) = self.milestones.iter().position(|m| m.id() == id) else {
            return Ok(None);
        };

        let removed = self.milestones.remove(position);
        self.renumber();
        debug!(id, stops = self.milestones.len(), "milestone removed");

        Ok(Some(removed))
    }

    /// Re-sequences the itinerary along the greedy nearest-neighbor tour.
    ///
    /// Explicitly caller-triggered; `add` and `remove` never reorder. The
    /// first-added milestone stays the tour's anchor. Milestones without a
    /// position fix cannot enter the distance computation; they keep their
    /// relative order and trail the routed block.
    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn reorder_by_route(&mut self) {
        let fixed: Vec<usize> = self
            .milestones
            .iter()
            .enumerate()
            .filter(|(_, milestone)| milestone.location().has_fix())
            .map(|(index, _)| index)
            .collect();

        if fixed.len() > 1 {
            let locations: Vec<Location> = fixed
                .iter()
                .map(|&index| self.milestones[index].location())
                .collect();
            let matrix = DistanceMatrix::from_haversine(&locations);
            let tour = nearest_neighbor_tour(&matrix);

            let mut sequence: Vec<usize> = tour.into_iter().map(|index| fixed[index]).collect();
            sequence.extend(
                (0..self.milestones.len())
                    .filter(|&index| !self.milestones[index].location().has_fix()),
            );

            let previous = self.milestones.to_vec();
            self.milestones = sequence
                .iter()
                .map(|&index| previous[index].clone())
                .collect();
        }

        self.renumber();
        debug!(stops = self.milestones.len(), "itinerary reordered");
    }

    /// Flags a stop as visited (or not). Returns whether the id was found.
    pub fn set_completed(&mut self, id: &str, completed: bool) -> bool {
        match self.milestones.iter_mut().find(|m| m.id() == id) {
            Some(milestone) => {
                milestone.set_completed(completed);
                true
            }
            None => false,
        }
    }

    /// Drops every milestone. The one mutation the size floor does not
    /// apply to.
    pub fn clear(&mut self) {
        self.milestones.clear();
    }

    /// The derived path for polyline rendering: every fixed point in the
    /// current visiting order. There is no route below two fixed points.
    pub fn route(&self) -> Option<Route> {
        let points: Vec<Location> = self
            .milestones
            .iter()
            .map(Milestone::location)
            .filter(Location::has_fix)
            .collect();

        if points.len() < 2 {
            return None;
        }

        Some(Route::new(points))
    }

    /// Sum of the stop duration estimates.
    pub fn total_duration(&self) -> SignedDuration {
        self.milestones
            .iter()
            .fold(SignedDuration::ZERO, |total, m| total + m.duration())
    }

    fn renumber(&mut self) {
        for (index, milestone) in self.milestones.iter_mut().enumerate() {
            milestone.set_order(index as u32 + 1);
        }
    }
}
