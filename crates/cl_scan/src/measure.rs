//! Scope measurement and risk classification.

use std::fmt;

use cl_ir::{Measurement, Token};
use cl_scope::Scope;

/// Number of distinct source lines the tokens occupy.
///
/// A token spanning several lines (block strings, for instance) counts
/// every line it touches. Tokens must be in source order.
pub fn count_lines(tokens: &[Token]) -> u32 {
    let mut count = 0u32;
    let mut last_counted = 0u32;
    for token in tokens {
        let first = token.location.line.max(last_counted.saturating_add(1));
        let last = token.last_line();
        if last >= first {
            count = count.saturating_add(last - first + 1);
            last_counted = last;
        }
    }
    count
}

/// Measurement of one scope, if its ranges are non-empty.
///
/// Length counts the lines of the body only; the header is excluded.
pub fn measure_scope(scope: &Scope<'_>) -> Option<Measurement> {
    let start = scope.start_location()?;
    let end = scope.end_location()?;
    let length = count_lines(scope.block.range.tokens());
    Some(Measurement::new(scope.name(), start, end, length))
}

/// Maintainability bucket for a function length.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum RiskCategory {
    /// Up to 15 lines.
    Ok,
    /// 16 to 30 lines.
    Warning,
    /// 31 to 60 lines.
    HardToMaintain,
    /// More than 60 lines.
    Unmaintainable,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::Ok,
        RiskCategory::Warning,
        RiskCategory::HardToMaintain,
        RiskCategory::Unmaintainable,
    ];

    pub fn from_length(length: u32) -> Self {
        match length {
            0..=15 => RiskCategory::Ok,
            16..=30 => RiskCategory::Warning,
            31..=60 => RiskCategory::HardToMaintain,
            _ => RiskCategory::Unmaintainable,
        }
    }

    /// Index into a count profile.
    pub const fn bucket(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            RiskCategory::Ok => "ok",
            RiskCategory::Warning => "warning",
            RiskCategory::HardToMaintain => "hard-to-maintain",
            RiskCategory::Unmaintainable => "unmaintainable",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of measurements in each [`RiskCategory`], indexed by bucket.
pub fn count_profile(measurements: &[Measurement]) -> [usize; 4] {
    let mut profile = [0; 4];
    for measurement in measurements {
        profile[RiskCategory::from_length(measurement.length).bucket()] += 1;
    }
    profile
}
