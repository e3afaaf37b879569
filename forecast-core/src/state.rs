use crate::{error::FetchError, model::Forecast};

/// Display-facing outcome of the most recent completed fetch.
///
/// Replaces the "optional forecasts + optional error" pair: after any
/// completed fetch exactly one of {forecasts, error message} holds, by
/// construction. Before the first fetch the state is `Idle` and neither
/// holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Success(Vec<Forecast>),
    Failure(String),
}

impl FetchState {
    /// Fold a completed fetch into the display state.
    ///
    /// Whole-state replacement: a success drops any prior error, a failure
    /// drops any prior forecasts. Applying outcomes of overlapping fetches
    /// in completion order therefore yields last-write-wins with no mixed
    /// state.
    pub fn apply(&mut self, outcome: Result<Vec<Forecast>, FetchError>) {
        *self = match outcome {
            Ok(forecasts) => FetchState::Success(forecasts),
            Err(err) => FetchState::Failure(err.to_string()),
        };
    }

    pub fn forecasts(&self) -> &[Forecast] {
        match self {
            FetchState::Success(forecasts) => forecasts,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FetchState::Failure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forecast(timestamp: &str, temperature_c: f64) -> Forecast {
        Forecast {
            timestamp: timestamp.to_string(),
            temperature_c,
            conditions: vec!["clear sky".to_string()],
        }
    }

    #[test]
    fn starts_idle_with_neither_side_populated() {
        let state = FetchState::default();
        assert!(state.forecasts().is_empty());
        assert_eq!(state.error(), None);
        assert!(!state.is_failure());
    }

    #[test]
    fn success_populates_forecasts_and_clears_any_error() {
        let mut state = FetchState::Failure("previous failure".to_string());

        state.apply(Ok(vec![forecast("2025-01-01 12:00:00", 21.5)]));

        assert_eq!(state.forecasts().len(), 1);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failure_clears_forecasts_and_retains_the_message() {
        let mut state = FetchState::Success(vec![forecast("2025-01-01 12:00:00", 21.5)]);

        state.apply(Err(FetchError::NoData));

        assert!(state.forecasts().is_empty());
        assert_eq!(state.error(), Some("forecast service returned no data"));
        assert!(state.is_failure());
    }

    #[test]
    fn exactly_one_side_holds_after_each_completed_fetch() {
        let mut state = FetchState::default();

        state.apply(Ok(vec![forecast("2025-01-01 12:00:00", 21.5)]));
        assert!(!state.forecasts().is_empty() && state.error().is_none());

        state.apply(Err(FetchError::NoData));
        assert!(state.forecasts().is_empty() && state.error().is_some());

        state.apply(Ok(vec![forecast("2025-01-01 15:00:00", 19.0)]));
        assert!(!state.forecasts().is_empty() && state.error().is_none());
    }

    #[test]
    fn last_applied_outcome_wins_wholesale() {
        let mut state = FetchState::default();

        state.apply(Ok(vec![forecast("2025-01-01 12:00:00", 21.5)]));
        state.apply(Ok(vec![forecast("2025-01-02 12:00:00", -4.0), forecast("2025-01-02 15:00:00", -2.5)]));

        let rows = state.forecasts();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].timestamp, "2025-01-02 12:00:00");
    }
}
