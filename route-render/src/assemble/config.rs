//! Assembly configuration.

use super::coords::AxisOrder;

/// Tunable parameters for one pipeline instance.
#[derive(Debug, Clone)]
pub struct AssembleConfig {
    /// Axis order assumed for bare coordinate pairs when no disambiguation
    /// heuristic is conclusive. Upstream producers that follow the naive
    /// convention dominate, hence `LatLon`, but the policy is a guess and
    /// deliberately not hard-coded in the extractor.
    pub axis_default: AxisOrder,

    /// Box tolerance in degrees when matching a geometry point against a
    /// resolved endpoint for axis-order detection.
    pub proximity_tolerance_deg: f64,
}

impl AssembleConfig {
    /// Create a configuration with the given parameters.
    pub fn new(axis_default: AxisOrder, proximity_tolerance_deg: f64) -> Self {
        Self {
            axis_default,
            proximity_tolerance_deg,
        }
    }
}

impl Default for AssembleConfig {
    fn default() -> Self {
        Self {
            axis_default: AxisOrder::LatLon,
            proximity_tolerance_deg: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_assumes_lat_lon_pairs() {
        let config = AssembleConfig::default();
        assert_eq!(config.axis_default, AxisOrder::LatLon);
        assert_eq!(config.proximity_tolerance_deg, 0.1);
    }
}
