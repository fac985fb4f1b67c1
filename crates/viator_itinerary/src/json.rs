use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::CandidateError,
    milestone::{Milestone, MilestoneBuilder},
};
use viator_tour::location::Location;

/// One record of a geocoding provider's search response. Providers deliver
/// coordinates as decimal strings.
#[derive(Deserialize, JsonSchema, Debug, Clone)]
#[serde(rename = "Place")]
pub struct JsonPlace {
    pub place_id: Option<String>,
    pub display_name: String,
    pub lat: String,
    pub lon: String,
    pub duration_minutes: Option<u32>,
}

impl JsonPlace {
    /// Resolves a provider record into a milestone candidate.
    ///
    /// The id falls back to the record's position in the response when the
    /// provider sent no place id. The name is the first comma-delimited
    /// segment of the display string; the address keeps the whole string.
    /// Records without a duration get the 30 minute default.
    pub fn resolve(self, position: usize) -> Result<Milestone, CandidateError> {
        let lat: f64 = self.lat.trim().parse()?;
        let lon: f64 = self.lon.trim().parse()?;

        let name = self
            .display_name
            .split(',')
            .next()
            .unwrap_or(&self.display_name)
            .trim()
            .to_owned();

        let mut builder = MilestoneBuilder::default();
        builder
            .set_id(self.place_id.unwrap_or_else(|| position.to_string()))
            .set_name(name)
            .set_address(self.display_name)
            .set_location(Location::from_lat_lon(lat, lon));

        if let Some(minutes) = self.duration_minutes {
            builder.set_duration_minutes(minutes);
        }

        Ok(builder.build())
    }
}

/// Parses a whole provider response body (a JSON array of places) into
/// milestone candidates.
pub fn resolve_candidates(body: &str) -> Result<Vec<Milestone>, CandidateError> {
    let places: Vec<JsonPlace> = serde_json::from_str(body)?;

    places
        .into_iter()
        .enumerate()
        .map(|(position, place)| place.resolve(position))
        .collect()
}

/// One entry of the ordered list handed to the presentation layer.
/// Coordinates are `[lon, lat]` pairs.
#[derive(Serialize, JsonSchema, Debug)]
#[serde(rename = "Milestone")]
pub struct JsonMilestone {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: [f64; 2],
    pub duration_minutes: i64,
    pub order: u32,
    pub completed: bool,
}

impl From<&Milestone> for JsonMilestone {
    fn from(milestone: &Milestone) -> Self {
        JsonMilestone {
            id: milestone.id().to_owned(),
            name: milestone.name().to_owned(),
            address: milestone.address().to_owned(),
            coordinates: [milestone.location().lon(), milestone.location().lat()],
            duration_minutes: milestone.duration().as_mins(),
            order: milestone.order(),
            completed: milestone.completed(),
        }
    }
}
