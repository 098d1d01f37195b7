use nalgebra as na;

/// One recorded point of the trajectory, taken after a completed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub time: f64, // s
    pub position: na::Vector3<f64>,
    pub velocity: na::Vector3<f64>,
}

/// Append-only, time-ordered record of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryHistory {
    samples: Vec<TrajectorySample>,
}

impl TrajectoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(
        &mut self,
        time: f64,
        position: na::Vector3<f64>,
        velocity: na::Vector3<f64>,
    ) {
        debug_assert!(self.samples.last().map_or(true, |last| last.time < time));
        self.samples.push(TrajectorySample {
            time,
            position,
            velocity,
        });
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectorySample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    pub fn positions(&self) -> Vec<na::Vector3<f64>> {
        self.samples.iter().map(|s| s.position).collect()
    }

    pub fn velocities(&self) -> Vec<na::Vector3<f64>> {
        self.samples.iter().map(|s| s.velocity).collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time).collect()
    }
}

impl<'a> IntoIterator for &'a TrajectoryHistory {
    type Item = &'a TrajectorySample;
    type IntoIter = std::slice::Iter<'a, TrajectorySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
