use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Param;

/// One sample of a sensitivity curve.
///
/// Holds the swept parameter's value and, per scenario label, the dependent
/// value or `None` where the curve breaks. Serializes as a flat map:
/// `{"meanA": 130.0, "80.00%": 85.0, "90.00%": null}`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub parameter: Param,
    pub value: f64,
    pub series: Vec<(String, Option<f64>)>,
}

impl PlotPoint {
    #[must_use]
    pub fn new(parameter: Param, value: f64) -> Self {
        Self {
            parameter,
            value,
            series: Vec::new(),
        }
    }

    /// Dependent value recorded for a scenario label
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.series
            .iter()
            .find(|(l, _)| l == label)
            .and_then(|(_, v)| *v)
    }

    /// Whether every scenario is defined at this point
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.series.iter().all(|(_, v)| v.is_some())
    }
}

impl Serialize for PlotPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.series.len() + 1))?;
        map.serialize_entry(self.parameter.name(), &self.value)?;
        for (label, value) in &self.series {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}
