use thiserror::Error;

/// Failures a single weather fetch attempt can surface.
///
/// Every failure is handled inside the attempt that produced it and becomes
/// exactly one user-facing error line; nothing propagates further up.
#[derive(Debug, Error)]
pub enum FetchError {
    /// City missing from the registry, or geocoding returned no match.
    #[error("{0}")]
    NotFound(String),

    /// Forecast endpoint answered with a non-success status.
    #[error("Weather data not available")]
    DataUnavailable,

    /// Transport-level failure from the HTTP client, shown verbatim.
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

impl FetchError {
    pub fn location_not_found(name: &str) -> Self {
        Self::NotFound(format!("Location {name} not found"))
    }

    pub fn coordinates_not_found(name: &str) -> Self {
        Self::NotFound(format!("Could not find coordinates for {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_match_contract() {
        let err = FetchError::location_not_found("Atlantis");
        assert_eq!(err.to_string(), "Location Atlantis not found");

        let err = FetchError::coordinates_not_found("Calgary");
        assert_eq!(err.to_string(), "Could not find coordinates for Calgary");
    }

    #[test]
    fn data_unavailable_message_matches_contract() {
        assert_eq!(FetchError::DataUnavailable.to_string(), "Weather data not available");
    }
}
