use jiff::SignedDuration;
use viator_tour::location::Location;

/// Assumed when a candidate record carries no duration of its own.
pub const DEFAULT_STOP_DURATION: SignedDuration = SignedDuration::from_mins(30);

/// A single geocoded stop: display metadata, a duration estimate, and a
/// 1-based position in the visiting sequence.
///
/// `order` and `completed` are owned by the itinerary. Whatever a candidate
/// carries in those fields is discarded on acceptance.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    id: String,
    name: String,
    address: String,
    location: Location,
    duration: SignedDuration,
    order: u32,
    completed: bool,
}

impl Milestone {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn duration(&self) -> SignedDuration {
        self.duration
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Re-stamps the sequence position and resets the visited flag, the
    /// state every milestone enters the itinerary with.
    pub(crate) fn accepted(mut self, order: u32) -> Milestone {
        self.order = order;
        self.completed = false;
        self
    }

    pub(crate) fn set_order(&mut self, order: u32) {
        self.order = order;
    }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

#[derive(Default)]
pub struct MilestoneBuilder {
    id: Option<String>,
    name: Option<String>,
    address: Option<String>,
    location: Option<Location>,
    duration: Option<SignedDuration>,
}

impl MilestoneBuilder {
    pub fn set_id(&mut self, id: String) -> &mut MilestoneBuilder {
        self.id = Some(id);
        self
    }

    pub fn set_name(&mut self, name: String) -> &mut MilestoneBuilder {
        self.name = Some(name);
        self
    }

    pub fn set_address(&mut self, address: String) -> &mut MilestoneBuilder {
        self.address = Some(address);
        self
    }

    pub fn set_location(&mut self, location: Location) -> &mut MilestoneBuilder {
        self.location = Some(location);
        self
    }

    pub fn set_duration(&mut self, duration: SignedDuration) -> &mut MilestoneBuilder {
        self.duration = Some(duration);
        self
    }

    pub fn set_duration_minutes(&mut self, minutes: u32) -> &mut MilestoneBuilder {
        self.duration = Some(SignedDuration::from_mins(i64::from(minutes)));
        self
    }

    pub fn build(&mut self) -> Milestone {
        Milestone {
            id: self.id.take().expect("Expected milestone id"),
            name: self.name.take().unwrap_or_default(),
            address: self.address.take().unwrap_or_default(),
            location: self
                .location
                .take()
                .unwrap_or_else(|| Location::from_lat_lon(0.0, 0.0)),
            duration: self.duration.take().unwrap_or(DEFAULT_STOP_DURATION),
            order: 0,
            completed: false,
        }
    }
}
