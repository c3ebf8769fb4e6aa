/// Fixed step reward curve over match counts.
///
/// Deliberately a lookup, not an interpolation: downstream fitness and
/// champion comparisons depend on these exact breakpoints. Every match count
/// below the lowest listed threshold collapses into the -32 bucket.
pub fn reward(matches: usize) -> f64 {
    match matches {
        15 => 32.0,
        14 => 16.0,
        13 => 8.0,
        12 => 4.0,
        11 => 2.0,
        10 => -2.0,
        9 => -4.0,
        8 => -8.0,
        7 => -16.0,
        _ => -32.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_breakpoints() {
        let expected = [
            (15, 32.0),
            (14, 16.0),
            (13, 8.0),
            (12, 4.0),
            (11, 2.0),
            (10, -2.0),
            (9, -4.0),
            (8, -8.0),
            (7, -16.0),
        ];
        for (matches, value) in expected {
            assert_eq!(reward(matches), value, "matches = {}", matches);
        }
    }

    #[test]
    fn test_below_lowest_threshold() {
        for matches in 0..7 {
            assert_eq!(reward(matches), -32.0, "matches = {}", matches);
        }
    }
}
