/// Stopping criteria shared by the root finders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Iteration cap; the only bound on runtime.
    pub max_iters: usize,
    /// Stopping threshold on the approximate relative error, in percent.
    pub tol_pct: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tol_pct: 1e-8,
        }
    }
}

impl Config {
    /// Validates the stopping threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol_pct` is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tol_pct.is_finite() || self.tol_pct < 0.0 {
            return Err("tol_pct must be finite and non-negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_and_non_finite_tolerance() {
        let config = Config {
            tol_pct: -0.5,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            tol_pct: f64::NAN,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
