//! Split a 1-D result collection into optimal and alternative points.

use crate::EfficiencyPoint;

/// The two tables shown after a Max-L sweep.
///
/// Both halves keep the relative order of the sweep.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    pub optimal:     Vec<EfficiencyPoint>,
    pub alternative: Vec<EfficiencyPoint>,
}

impl Partition {
    pub fn of(points: &[EfficiencyPoint]) -> Self {
        let (optimal, alternative) = points.iter().partition(|p| p.is_optimal);
        Self { optimal, alternative }
    }

    /// The last optimal point: the largest L inside the tolerance band when
    /// the sweep ran over increasing L.  `None` if no point qualified.
    pub fn operating_point(&self) -> Option<&EfficiencyPoint> {
        self.optimal.last()
    }
}
