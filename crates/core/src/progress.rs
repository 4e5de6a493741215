//! Revenue progress gauge (half-circle arc).

use serde::Serialize;

use crate::error::CoreError;

/// Revenue target used when none is configured.
pub const DEFAULT_REVENUE_TARGET: f64 = 600_000.0;

/// Target against which revenue progress is measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressConfig {
    target: f64,
}

impl ProgressConfig {
    /// Reject targets that would leave the ratio undefined.
    pub fn new(target: f64) -> Result<Self, CoreError> {
        if !target.is_finite() || target <= 0.0 {
            return Err(CoreError::Validation(format!(
                "Revenue target must be a positive number, got {target}"
            )));
        }
        Ok(Self { target })
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_REVENUE_TARGET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressGauge {
    /// Whole percent in `0..=100`.
    pub percent: u8,
}

impl ProgressGauge {
    /// Portion of the half circle to fill, in `0.0..=1.0`.
    pub fn arc_fraction(&self) -> f64 {
        f64::from(self.percent) / 100.0
    }

    /// Stroke length of the filled arc for a half circle of `radius`.
    pub fn arc_length(&self, radius: f64) -> f64 {
        self.arc_fraction() * std::f64::consts::PI * radius
    }
}

/// `clamp(round(revenue / target * 100), 0, 100)`.
pub fn progress_percent(revenue: f64, target: f64) -> u8 {
    if !target.is_finite() || target <= 0.0 || !revenue.is_finite() {
        return 0;
    }
    (revenue / target * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn progress_gauge(revenue: f64, config: &ProgressConfig) -> ProgressGauge {
    ProgressGauge {
        percent: progress_percent(revenue, config.target),
    }
}
