//! Reduced automation curves for a single control

use serde::{Deserialize, Serialize};

/// A point on a control curve
///
/// Inside the crate `time` is first an absolute clock reading and becomes a
/// fraction of the track length once the curve is normalized. `value` is
/// always the 7-bit controller value divided by 127.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub time: f64,
    pub value: f64,
}

impl CurvePoint {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<(f64, f64)> for CurvePoint {
    fn from((time, value): (f64, f64)) -> Self {
        Self { time, value }
    }
}

impl From<CurvePoint> for (f64, f64) {
    fn from(point: CurvePoint) -> Self {
        (point.time, point.value)
    }
}

/// The defining points of one control's movement over a track
///
/// Both axes lie in `[0, 1]` and times never decrease. A run of equal values
/// keeps only its first and last point. Every curve has at least two points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReducedCurve {
    points: Vec<CurvePoint>,
}

impl ReducedCurve {
    /// Wrap already reduced, normalized points
    pub(crate) fn from_points(points: Vec<CurvePoint>) -> Self {
        debug_assert!(points.len() > 1);
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&CurvePoint> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    /// Time column, for plotting libraries that take separate x/y series
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.time)
    }

    /// Value column
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Held value at normalized time `t`
    ///
    /// Controllers jump rather than glide, so this is the value of the last
    /// point at or before `t`. Before the first point the first value is used.
    #[must_use]
    pub fn value_at(&self, t: f64) -> f64 {
        let idx = self.points.partition_point(|p| p.time <= t);
        self.points[idx.saturating_sub(1)].value
    }
}

impl<'a> IntoIterator for &'a ReducedCurve {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
