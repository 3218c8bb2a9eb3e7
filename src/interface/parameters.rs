use crate::distance_measure::{Dtw, DtwMode, Edr, Lcss};
use crate::error::{DistanceError, Result};
use crate::interface::Metric;
use crate::utils::LibData;

/// Everything needed to pick and run a distance measure by name.
///
/// `delta` and `epsilon` have no defaults; asking for `"lcss"` or `"edr"`
/// without them fails.
#[derive(Clone, Debug)]
pub struct Parameters<A: LibData> {
    pub n_threads: Option<usize>,
    pub distance_measure: String,
    pub window: Option<usize>,
    pub mode: DtwMode,
    pub delta: Option<A>,
    pub epsilon: Option<A>,
}

impl<A: LibData> Default for Parameters<A> {
    fn default() -> Self {
        Self {
            n_threads: None,
            distance_measure: "dtw".to_string(),
            window: None,
            mode: DtwMode::default(),
            delta: None,
            epsilon: None,
        }
    }
}

impl<A: LibData> Parameters<A> {
    pub fn metric(&self) -> Result<Metric<A>> {
        match self.distance_measure.as_str() {
            "dtw" => Ok(Metric::Dtw(Dtw::new(self.window, self.mode))),
            "lcss" => Ok(Metric::Lcss(Lcss::new(
                self.required("delta", self.delta)?,
                self.required("epsilon", self.epsilon)?,
            )?)),
            "edr" => Ok(Metric::Edr(Edr::new(self.required("epsilon", self.epsilon)?)?)),
            other => Err(DistanceError::InvalidArgument(format!(
                "Distance measure {} not known.",
                other
            ))),
        }
    }

    fn required(&self, name: &str, value: Option<A>) -> Result<A> {
        value.ok_or_else(|| {
            DistanceError::InvalidArgument(format!(
                "{} requires {} to be set",
                self.distance_measure, name
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DistanceMeasure;

    #[test]
    fn test_default_is_unbounded_dependent_dtw() {
        let metric = Parameters::<f64>::default().metric().unwrap();

        assert_eq!(metric, Metric::Dtw(Dtw::new(None, DtwMode::Dependent)));
        assert_eq!(metric.name(), "dtw");
    }

    #[test]
    fn test_lcss_needs_thresholds() {
        let mut parameters = Parameters::<f64> {
            distance_measure: "lcss".to_string(),
            epsilon: Some(0.5),
            ..Default::default()
        };
        assert!(matches!(
            parameters.metric(),
            Err(DistanceError::InvalidArgument(_))
        ));

        parameters.delta = Some(f64::INFINITY);
        assert_eq!(
            parameters.metric().unwrap(),
            Metric::Lcss(Lcss { delta: f64::INFINITY, epsilon: 0.5 })
        );
    }

    #[test]
    fn test_edr_rejects_negative_epsilon() {
        let parameters = Parameters::<f32> {
            distance_measure: "edr".to_string(),
            epsilon: Some(-1.0),
            ..Default::default()
        };

        assert!(matches!(
            parameters.metric(),
            Err(DistanceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unknown_measure() {
        let parameters = Parameters::<f64> {
            distance_measure: "frechet".to_string(),
            ..Default::default()
        };

        assert!(parameters.metric().is_err());
    }
}
