// Similarity bands for reporting.
//
// The score itself is what gets persisted; bands only group scores into
// coarse labels for the terminal report.

use serde::Serialize;

/// Coarse classification of a similarity score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SimilarityBand {
    Minimal,
    Low,
    Moderate,
    High,
}

impl SimilarityBand {
    /// Determine the band from a score in [0, 1].
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 0.8 => SimilarityBand::High,
            s if s >= 0.5 => SimilarityBand::Moderate,
            s if s >= 0.2 => SimilarityBand::Low,
            _ => SimilarityBand::Minimal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityBand::High => "High",
            SimilarityBand::Moderate => "Moderate",
            SimilarityBand::Low => "Low",
            SimilarityBand::Minimal => "Minimal",
        }
    }
}

impl std::fmt::Display for SimilarityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(SimilarityBand::from_score(1.0), SimilarityBand::High);
        assert_eq!(SimilarityBand::from_score(0.8), SimilarityBand::High);
        assert_eq!(SimilarityBand::from_score(0.79), SimilarityBand::Moderate);
        assert_eq!(SimilarityBand::from_score(0.5), SimilarityBand::Moderate);
        assert_eq!(SimilarityBand::from_score(0.2), SimilarityBand::Low);
        assert_eq!(SimilarityBand::from_score(0.0), SimilarityBand::Minimal);
    }
}
