/// Coverage band derived from an occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CoverageLevel {
    Never,
    Rarely,
    Adequate,
    Over,
}

impl CoverageLevel {
    pub const ALL: [CoverageLevel; 4] = [
        CoverageLevel::Never,
        CoverageLevel::Rarely,
        CoverageLevel::Adequate,
        CoverageLevel::Over,
    ];

    /// Closed-open bands: `0`, `[1, 3)`, `[3, 7)`, `[7, ∞)`.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => CoverageLevel::Never,
            1..=2 => CoverageLevel::Rarely,
            3..=6 => CoverageLevel::Adequate,
            _ => CoverageLevel::Over,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CoverageLevel::Never => "never",
            CoverageLevel::Rarely => "rarely",
            CoverageLevel::Adequate => "adequate",
            CoverageLevel::Over => "over",
        }
    }

    pub fn status_label(self) -> &'static str {
        match self {
            CoverageLevel::Never => "Never",
            CoverageLevel::Rarely => "Rarely",
            CoverageLevel::Adequate => "Adequate",
            CoverageLevel::Over => "Over",
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            CoverageLevel::Never => "Never Taught",
            CoverageLevel::Rarely => "Rarely Covered",
            CoverageLevel::Adequate => "Adequately Covered",
            CoverageLevel::Over => "Over-Taught",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            CoverageLevel::Never => "#ea384c",
            CoverageLevel::Rarely => "#FEF7CD",
            CoverageLevel::Adequate => "#F2FCE2",
            CoverageLevel::Over => "#D3E4FD",
        }
    }

    pub fn foreground(self) -> &'static str {
        match self {
            CoverageLevel::Never => "#ffffff",
            _ => "#1f2937",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_band_boundaries() {
        assert_eq!(CoverageLevel::from_count(0), CoverageLevel::Never);
        assert_eq!(CoverageLevel::from_count(1), CoverageLevel::Rarely);
        assert_eq!(CoverageLevel::from_count(2), CoverageLevel::Rarely);
        assert_eq!(CoverageLevel::from_count(3), CoverageLevel::Adequate);
        assert_eq!(CoverageLevel::from_count(6), CoverageLevel::Adequate);
        assert_eq!(CoverageLevel::from_count(7), CoverageLevel::Over);
        assert_eq!(CoverageLevel::from_count(u32::MAX), CoverageLevel::Over);
    }

    #[test]
    fn bands_are_ordered_from_never_to_over() {
        let mut sorted = CoverageLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, CoverageLevel::ALL);
        assert_eq!(CoverageLevel::Adequate.as_str(), "adequate");
    }
}
