//! Marker tiers by total driver count.

/// Visual bucket for a state's marker. Bounds are exclusive lower limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    High,
    MidHigh,
    Mid,
    Low,
}

impl Tier {
    /// Largest first, the order the legend lists them in.
    pub const ALL: [Tier; 4] = [Tier::High, Tier::MidHigh, Tier::Mid, Tier::Low];

    pub fn classify(total: i64) -> Self {
        if total > 10_000_000 {
            Tier::High
        } else if total > 5_000_000 {
            Tier::MidHigh
        } else if total > 2_000_000 {
            Tier::Mid
        } else {
            Tier::Low
        }
    }

    /// Marker radius in pixels.
    pub fn radius(self) -> u32 {
        match self {
            Tier::High => 15,
            Tier::MidHigh => 12,
            Tier::Mid => 10,
            Tier::Low => 8,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Tier::High => "red",
            Tier::MidHigh => "orange",
            Tier::Mid => "yellow",
            Tier::Low => "blue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::High => "> 10M drivers",
            Tier::MidHigh => "5M - 10M drivers",
            Tier::Mid => "2M - 5M drivers",
            Tier::Low => "< 2M drivers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds_are_exclusive() {
        assert_eq!(Tier::classify(10_000_001), Tier::High);
        assert_eq!(Tier::classify(10_000_000), Tier::MidHigh);
        assert_eq!(Tier::classify(5_000_001), Tier::MidHigh);
        assert_eq!(Tier::classify(5_000_000), Tier::Mid);
        assert_eq!(Tier::classify(2_000_001), Tier::Mid);
        assert_eq!(Tier::classify(2_000_000), Tier::Low);
        assert_eq!(Tier::classify(0), Tier::Low);
    }

    #[test]
    fn test_tier_styles() {
        let styles: Vec<(u32, &str)> = Tier::ALL.iter().map(|t| (t.radius(), t.color())).collect();
        assert_eq!(
            styles,
            vec![(15, "red"), (12, "orange"), (10, "yellow"), (8, "blue")]
        );
    }
}
