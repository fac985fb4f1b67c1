use thiserror::Error;

/// Rejections raised by itinerary mutations. All of them leave the
/// itinerary untouched; none of them is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItineraryError {
    #[error("itinerary is full ({max} stops)")]
    LimitExceeded { max: usize },

    #[error("itinerary needs at least {min} stops")]
    MinimumRequired { min: usize },

    #[error("milestone `{id}` is already part of the itinerary")]
    DuplicateEntry { id: String },
}

/// Faults in the geocoding collaborator's candidate payload.
#[derive(Error, Debug)]
pub enum CandidateError {
    #[error("malformed candidate payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("malformed candidate coordinate: {0}")]
    Coordinate(#[from] std::num::ParseFloatError),
}
