use super::{round_half_up, share};

/// Selection counts from a concept validation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConceptSignals {
    pub target_markets: usize,
    pub competitors: usize,
    pub startup_costs: usize,
    pub revenue_streams: usize,
    pub feedback_methods: usize,
    pub risks_identified: usize,
    pub risks_mitigated: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationScores {
    pub market: f64,
    pub financial: f64,
    pub operational: f64,
    pub overall: f64,
}

impl ConceptSignals {
    /// Mitigations per identified risk. Zero when nothing was entered;
    /// unbounded when mitigations exist without identified risks.
    pub fn mitigation_ratio(&self) -> f64 {
        let ratio = self.risks_mitigated as f64 / self.risks_identified as f64;
        if ratio.is_nan() {
            0.0
        } else {
            ratio
        }
    }

    pub fn scores(&self) -> ValidationScores {
        let market = (share(self.target_markets, 5.0) + share(self.competitors, 3.0)) / 2.0;
        let financial = (share(self.startup_costs, 5.0) + share(self.revenue_streams, 3.0)) / 2.0;
        let operational =
            (share(self.feedback_methods, 4.0) + self.mitigation_ratio() * 100.0) / 2.0;
        let overall = (market + financial + operational) / 3.0;
        ValidationScores {
            market: round_half_up(market),
            financial: round_half_up(financial),
            operational: round_half_up(operational),
            overall: round_half_up(overall),
        }
    }
}
