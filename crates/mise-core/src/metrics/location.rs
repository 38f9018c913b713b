use super::{round_half_up, share};

/// Counts and figures feeding the location scorecard.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocationFactors {
    pub age_groups: usize,
    pub occupations: usize,
    /// Selections across parking, transport, visibility and traffic.
    pub accessibility_tags: usize,
    pub direct_competitors: f64,
    pub market_gaps: usize,
    pub monthly_rent: f64,
}

/// Whole-number scores. Values are not clamped and may leave 0..=100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationScores {
    pub demographic: f64,
    pub accessibility: f64,
    pub competition: f64,
    pub financial: f64,
    pub overall: f64,
}

const RENT_CEILING: f64 = 10_000.0;

impl LocationFactors {
    pub fn scores(&self) -> LocationScores {
        let demographic = share(self.age_groups, 5.0) + share(self.occupations, 5.0);
        let accessibility = share(self.accessibility_tags, 20.0);
        let competition =
            (1.0 - self.direct_competitors / 10.0) * 50.0 + share(self.market_gaps, 5.0) / 2.0;
        let financial = (1.0 - self.monthly_rent / RENT_CEILING) * 100.0;
        let overall = (demographic + accessibility + competition + financial) / 4.0;
        LocationScores {
            demographic: round_half_up(demographic),
            accessibility: round_half_up(accessibility),
            competition: round_half_up(competition),
            financial: round_half_up(financial),
            overall: round_half_up(overall),
        }
    }
}
