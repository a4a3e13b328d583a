//! Score scale handling for analysis payloads.

/// Normalize a model-returned score onto the 0-100 scale.
///
/// Scores at or below 10 are treated as a 0-10 payload and multiplied by 10;
/// anything above is taken as already 0-100. A genuine 0-100 score of 8 is
/// indistinguishable from 8/10 here and becomes 80; known upstream
/// ambiguity, preserved as observed.
pub fn normalize_score(score: f64) -> f64 {
    let scaled = if score <= 10.0 { score * 10.0 } else { score };
    scaled.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescales_zero_to_ten() {
        assert_eq!(normalize_score(8.0), 80.0);
        assert_eq!(normalize_score(10.0), 100.0);
        assert_eq!(normalize_score(0.0), 0.0);
    }

    #[test]
    fn test_passes_through_full_scale() {
        assert_eq!(normalize_score(11.0), 11.0);
        assert_eq!(normalize_score(64.25), 64.25);
        assert_eq!(normalize_score(100.0), 100.0);
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(normalize_score(150.0), 100.0);
        assert_eq!(normalize_score(-3.0), 0.0);
    }
}
