use crate::config::FilterChoice;
use crate::filters::{Ewma, ScalarFilter, ScalarKalman, SlidingWindowMean};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Constructs the filter a [`FilterChoice`] describes.
///
/// Parameter validation happens here, not in the filter constructors:
/// rejecting a degenerate configuration up front beats a
/// `DegenerateGain` failure mid-stream.
pub fn build_filter(choice: &FilterChoice) -> Result<Box<dyn ScalarFilter>, BuildError> {
    match choice {
        FilterChoice::Kalman(p) => {
            for (name, value) in [
                ("initial_estimate", p.initial_estimate),
                ("state_transition", p.state_transition),
                ("observation", p.observation),
                ("process_noise", p.process_noise),
                ("observation_noise", p.observation_noise),
                ("initial_covariance", p.initial_covariance),
            ] {
                if !value.is_finite() {
                    return Err(BuildError::InvalidParameter(format!(
                        "{name} must be finite, got {value}"
                    )));
                }
            }
            if p.process_noise < 0.0 {
                return Err(BuildError::InvalidParameter(format!(
                    "process_noise must be >= 0, got {}",
                    p.process_noise
                )));
            }
            if p.observation_noise <= 0.0 {
                return Err(BuildError::InvalidParameter(format!(
                    "observation_noise must be > 0, got {}",
                    p.observation_noise
                )));
            }
            if p.initial_covariance < 0.0 {
                return Err(BuildError::InvalidParameter(format!(
                    "initial_covariance must be >= 0, got {}",
                    p.initial_covariance
                )));
            }
            Ok(Box::new(ScalarKalman::with_parameters(
                p.initial_estimate,
                p.state_transition,
                p.observation,
                p.process_noise,
                p.observation_noise,
                p.initial_covariance,
            )))
        }
        FilterChoice::SlidingWindow(p) => {
            if p.window_size == 0 {
                return Err(BuildError::InvalidParameter(
                    "window_size must be >= 1".to_string(),
                ));
            }
            Ok(Box::new(SlidingWindowMean::with_window_size(p.window_size)))
        }
        FilterChoice::Ewma(p) => {
            if !p.alpha.is_finite() {
                return Err(BuildError::InvalidParameter(format!(
                    "alpha must be finite, got {}",
                    p.alpha
                )));
            }
            Ok(Box::new(Ewma::with_alpha(p.alpha)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EwmaParameters, KalmanParameters, SlidingWindowParameters};

    #[test]
    fn builds_every_kind_from_defaults() {
        let choices = [
            FilterChoice::Kalman(KalmanParameters::default()),
            FilterChoice::SlidingWindow(SlidingWindowParameters::default()),
            FilterChoice::Ewma(EwmaParameters::default()),
        ];
        for choice in &choices {
            let mut filter = build_filter(choice).unwrap();
            assert!(filter.update(4.0).unwrap().is_finite());
        }
    }

    #[test]
    fn built_ewma_applies_the_clamped_alpha() {
        let choice = FilterChoice::Ewma(EwmaParameters { alpha: 5.0 });
        let mut filter = build_filter(&choice).unwrap();
        filter.update(1.0).unwrap();
        // Alpha clamps to 1.0, so the filter tracks the raw input exactly.
        assert_eq!(filter.update(9.0).unwrap(), 9.0);
    }

    #[test]
    fn rejects_zero_window() {
        let choice = FilterChoice::SlidingWindow(SlidingWindowParameters { window_size: 0 });
        let err = build_filter(&choice).unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameter(_)));
    }

    #[test]
    fn rejects_degenerate_kalman_noise() {
        let p = KalmanParameters {
            observation_noise: 0.0,
            ..Default::default()
        };
        let err = build_filter(&FilterChoice::Kalman(p)).unwrap_err();
        assert!(matches!(err, BuildError::InvalidParameter(_)));

        let p = KalmanParameters {
            process_noise: -0.5,
            ..Default::default()
        };
        assert!(build_filter(&FilterChoice::Kalman(p)).is_err());

        let p = KalmanParameters {
            initial_covariance: f64::NAN,
            ..Default::default()
        };
        assert!(build_filter(&FilterChoice::Kalman(p)).is_err());
    }

    #[test]
    fn rejects_non_finite_alpha() {
        let choice = FilterChoice::Ewma(EwmaParameters { alpha: f64::NAN });
        assert!(build_filter(&choice).is_err());
    }

    #[test]
    fn config_json_to_running_filter() {
        let choice: FilterChoice = serde_json::from_str(
            r#"{"type":"kalman","params":{"initial_estimate":0.0,"process_noise":0.01}}"#,
        )
        .unwrap();
        let mut filter = build_filter(&choice).unwrap();

        for _ in 0..100 {
            filter.update(5.0).unwrap();
        }
        assert!((filter.filtered().unwrap() - 5.0).abs() < 0.1);
    }
}
