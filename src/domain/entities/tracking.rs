//! Tracking record entity produced by a single carrier lookup.

/// Most recent status event recorded by the carrier for a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackingEvent {
    pub date: String,
    pub time: String,
    pub description: String,
}

impl TrackingEvent {
    pub fn new(date: String, time: String, description: String) -> Self {
        Self {
            date,
            time,
            description,
        }
    }
}

/// Outcome of one successful lookup.
///
/// A lookup can succeed at the transport level and still report that the
/// carrier does not know the tracking number. That condition is carried in
/// `error` as a non-empty message and does not fail the surrounding batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackingRecord {
    pub number: String,
    pub error: String,
    pub name: String,
    pub event: Option<TrackingEvent>,
}

impl TrackingRecord {
    /// Creates a new TrackingRecord.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let record = TrackingRecord::new(
    ///     "PN848933136BR".to_string(),
    ///     String::new(),
    ///     "Objeto postado".to_string(),
    ///     Some(TrackingEvent::new(
    ///         "18/10/2026".to_string(),
    ///         "10:15".to_string(),
    ///         "Objeto entregue ao destinatário".to_string(),
    ///     )),
    /// );
    /// ```
    pub fn new(number: String, error: String, name: String, event: Option<TrackingEvent>) -> Self {
        Self {
            number,
            error,
            name,
            event,
        }
    }

    /// Builds a record for a number the carrier does not know.
    pub fn not_found(number: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            error: error.into(),
            ..Self::default()
        }
    }

    /// Returns true when the carrier reported no per-item error.
    pub fn is_found(&self) -> bool {
        self.error.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_event_is_found() {
        let record = TrackingRecord::new(
            "PN848933136BR".to_string(),
            String::new(),
            "Objeto".to_string(),
            Some(TrackingEvent::new(
                "01/02/2026".to_string(),
                "12:00".to_string(),
                "Objeto postado".to_string(),
            )),
        );

        assert!(record.is_found());
        assert_eq!(record.event.unwrap().description, "Objeto postado");
    }

    #[test]
    fn test_not_found_record() {
        let record = TrackingRecord::not_found("XX123CC", "Objeto não encontrado na base de dados");

        assert!(!record.is_found());
        assert_eq!(record.number, "XX123CC");
        assert!(record.name.is_empty());
        assert!(record.event.is_none());
    }
}
