// ── List filter criteria ──
//
// Held by the store between refreshes. Blank strings are normalised to
// `None` so they never reach the query string.

use serde::Serialize;

use super::codes::FlightStatus;

/// Criteria for `GET /flights`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightFilter {
    pub status: Option<FlightStatus>,
    pub destination_city: Option<String>,
}

impl FlightFilter {
    pub fn by_status(status: FlightStatus) -> Self {
        Self {
            status: Some(status),
            destination_city: None,
        }
    }

    pub fn by_city(city: impl Into<String>) -> Self {
        Self {
            status: None,
            destination_city: Some(city.into()),
        }
        .normalized()
    }

    /// Trim the city and drop it if nothing is left.
    pub fn normalized(mut self) -> Self {
        self.destination_city = self
            .destination_city
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty());
        self
    }

    /// Overlay `update` on `self`: fields present in `update` win, omitted
    /// fields keep their current value. A present but blank city clears
    /// the stored one. Status can only be cleared with a replacing filter.
    pub fn merged(&self, update: FlightFilter) -> Self {
        let destination_city = match update.destination_city {
            Some(city) => Some(city.trim().to_owned()).filter(|c| !c.is_empty()),
            None => self.destination_city.clone(),
        };
        Self {
            status: update.status.or(self.status),
            destination_city,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.destination_city.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge_keeps_omitted_fields() {
        let stored = FlightFilter {
            status: Some(FlightStatus::Delayed),
            destination_city: Some("Rome".into()),
        };
        let merged = stored.merged(FlightFilter::by_city("Paris"));
        assert_eq!(merged.status, Some(FlightStatus::Delayed));
        assert_eq!(merged.destination_city.as_deref(), Some("Paris"));

        let unchanged = stored.merged(FlightFilter::default());
        assert_eq!(unchanged, stored);
    }

    #[test]
    fn blank_city_in_update_clears_stored_city() {
        let stored = FlightFilter {
            status: Some(FlightStatus::Delayed),
            destination_city: Some("Rome".into()),
        };
        let merged = stored.merged(FlightFilter {
            status: None,
            destination_city: Some("  ".into()),
        });
        assert_eq!(merged.destination_city, None);
        assert_eq!(merged.status, Some(FlightStatus::Delayed));
    }

    #[test]
    fn blank_city_is_dropped() {
        let f = FlightFilter::by_city("   ");
        assert!(f.destination_city.is_none());
        assert!(f.is_empty());
    }
}
