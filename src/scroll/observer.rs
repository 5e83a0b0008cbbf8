//! Threshold-crossing visibility observer.

/// A target changed sides of the threshold (or was seen for the first time).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub index: usize,
    /// True when the target is now at or above the threshold.
    pub entering: bool,
    pub fraction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetState {
    Pending,
    Seen { intersecting: bool },
    Unobserved,
}

/// Reports threshold crossings of a fixed set of targets.
///
/// The first evaluation reports every observed target; later evaluations
/// only report targets whose side of the threshold changed.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityObserver {
    threshold: f64,
    targets: Vec<TargetState>,
}

impl VisibilityObserver {
    pub fn new(threshold: f64, target_count: usize) -> Self {
        Self {
            threshold,
            targets: vec![TargetState::Pending; target_count],
        }
    }

    /// Stops reporting `index` for good.
    pub fn unobserve(&mut self, index: usize) {
        if let Some(target) = self.targets.get_mut(index) {
            *target = TargetState::Unobserved;
        }
    }

    /// Evaluates targets against their current visible fractions.
    ///
    /// `fraction_of` is called for observed targets only.
    pub fn evaluate(&mut self, fraction_of: impl Fn(usize) -> f64) -> Vec<Crossing> {
        let mut crossings = Vec::new();
        for (index, target) in self.targets.iter_mut().enumerate() {
            let previous = match *target {
                TargetState::Unobserved => continue,
                TargetState::Pending => None,
                TargetState::Seen { intersecting } => Some(intersecting),
            };
            let fraction = fraction_of(index);
            let intersecting = fraction >= self.threshold;
            if previous != Some(intersecting) {
                *target = TargetState::Seen { intersecting };
                crossings.push(Crossing {
                    index,
                    entering: intersecting,
                    fraction,
                });
            }
        }
        crossings
    }
}
