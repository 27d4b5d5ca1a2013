//! Categorical bands for Likert-style scores.
//!
//! Scores below 1 are the parser's fail-soft defaults for missing answers and
//! get no level.

/// AI trust or dependence (1-7 mean).
#[must_use]
pub fn trust_level(score: f64) -> Option<&'static str> {
    if score < 1.0 {
        None
    } else if score <= 2.0 {
        Some("low")
    } else if score <= 4.0 {
        Some("moderate")
    } else if score <= 5.5 {
        Some("moderate-high")
    } else {
        Some("high")
    }
}

/// Free-recall confidence (1-7).
#[must_use]
pub const fn confidence_level(score: i64) -> Option<&'static str> {
    match score {
        ..=0 => None,
        1..=3 => Some("low"),
        4..=5 => Some("moderate"),
        6 => Some("moderate-high"),
        _ => Some("maximum"),
    }
}

/// Free-recall difficulty (1-7).
#[must_use]
pub const fn difficulty_level(score: i64) -> Option<&'static str> {
    match score {
        ..=0 => None,
        1..=2 => Some("low"),
        3..=5 => Some("moderate"),
        6 => Some("moderate-high"),
        _ => Some("high"),
    }
}

/// Manipulation-check coherence or connectivity (1-7).
#[must_use]
pub const fn coherence_level(score: i64) -> Option<&'static str> {
    match score {
        ..=0 => None,
        1..=2 => Some("low"),
        3..=4 => Some("moderate"),
        5 => Some("moderate-high"),
        6 => Some("high"),
        _ => Some("very high"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, None)]
    #[case(1.0, Some("low"))]
    #[case(2.0, Some("low"))]
    #[case(3.5, Some("moderate"))]
    #[case(5.5, Some("moderate-high"))]
    #[case(5.75, Some("high"))]
    fn trust_bands(#[case] score: f64, #[case] expected: Option<&str>) {
        assert_eq!(trust_level(score), expected);
    }

    #[rstest]
    #[case(-1, None)]
    #[case(0, None)]
    #[case(3, Some("low"))]
    #[case(5, Some("moderate"))]
    #[case(6, Some("moderate-high"))]
    #[case(7, Some("maximum"))]
    fn confidence_bands(#[case] score: i64, #[case] expected: Option<&str>) {
        assert_eq!(confidence_level(score), expected);
    }

    #[rstest]
    #[case(0, None)]
    #[case(2, Some("low"))]
    #[case(3, Some("moderate"))]
    #[case(5, Some("moderate"))]
    #[case(6, Some("moderate-high"))]
    #[case(7, Some("high"))]
    fn difficulty_bands(#[case] score: i64, #[case] expected: Option<&str>) {
        assert_eq!(difficulty_level(score), expected);
    }

    #[rstest]
    #[case(-1, None)]
    #[case(2, Some("low"))]
    #[case(4, Some("moderate"))]
    #[case(5, Some("moderate-high"))]
    #[case(6, Some("high"))]
    #[case(7, Some("very high"))]
    fn coherence_bands(#[case] score: i64, #[case] expected: Option<&str>) {
        assert_eq!(coherence_level(score), expected);
    }
}
