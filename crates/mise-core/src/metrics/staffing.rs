/// Average weeks per month used for the monthly projection.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Daily hours per shift. Weekday shifts run five days, the weekend shift two.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShiftPlan {
    pub morning: f64,
    pub afternoon: f64,
    pub evening: f64,
    pub weekend: f64,
}

impl ShiftPlan {
    pub fn weekly_hours(&self) -> f64 {
        (self.morning + self.afternoon + self.evening) * 5.0 + self.weekend * 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaffBudget {
    pub hourly: f64,
    pub weekly: f64,
    pub monthly: f64,
}

/// `roles` yields `(hourly_rate, headcount)` pairs.
pub fn budget(roles: impl IntoIterator<Item = (f64, f64)>, shifts: &ShiftPlan) -> StaffBudget {
    let hourly: f64 = roles.into_iter().map(|(rate, headcount)| rate * headcount).sum();
    let weekly = hourly * shifts.weekly_hours();
    StaffBudget {
        hourly,
        weekly,
        monthly: weekly * WEEKS_PER_MONTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_scales_rates_by_shift_hours() {
        let shifts = ShiftPlan {
            morning: 8.0,
            afternoon: 0.0,
            evening: 0.0,
            weekend: 4.0,
        };
        assert_eq!(shifts.weekly_hours(), 48.0);

        let result = budget([(15.0, 2.0), (20.0, 1.0)], &shifts);
        assert_eq!(result.hourly, 50.0);
        assert_eq!(result.weekly, 2400.0);
        assert!((result.monthly - 10_392.0).abs() < 1e-6);
    }
}
