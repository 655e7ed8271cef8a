// Department skill-gap analysis and the dashboard summary, both computed
// from fixture profiles through the comparator.

pub mod dashboard;
pub mod department;
pub mod handlers;

/// Rounds to one decimal place for display. Averages like `4.0 - 2.8`
/// otherwise leak float noise into responses.
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_tenths() {
        assert_eq!(round_tenths(4.0 - 2.8), 1.2);
        assert_eq!(round_tenths(4.0 - 3.8), 0.2);
        assert_eq!(round_tenths(0.0), 0.0);
    }
}
