/// Which kind of extremum the search is after.
///
/// The solver compares interior objective values with this goal's ordering,
/// so the same interval-narrowing loop serves both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Goal {
    /// Seek the largest objective value.
    #[default]
    Maximize,
    /// Seek the smallest objective value.
    Minimize,
}

impl Goal {
    /// Whether objective value `a` beats `b` under this goal.
    pub(crate) fn better(self, a: f64, b: f64) -> bool {
        match self {
            Self::Maximize => a > b,
            Self::Minimize => a < b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_flips_with_the_goal() {
        assert!(Goal::Maximize.better(2.0, 1.0));
        assert!(!Goal::Maximize.better(1.0, 2.0));
        assert!(Goal::Minimize.better(1.0, 2.0));
        assert!(!Goal::Minimize.better(2.0, 1.0));
    }

    #[test]
    fn ties_are_not_better() {
        assert!(!Goal::Maximize.better(1.0, 1.0));
        assert!(!Goal::Minimize.better(1.0, 1.0));
    }
}
