mod common;

use chrono::NaiveDate;
use showcase_core::generators::weather::{
    forecast, render_forecast, Condition, MAX_TEMPERATURE, MIN_TEMPERATURE,
};
use showcase_core::{GenError, SeededRandom};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scripted;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 30).unwrap()
    }

    #[test]
    fn test_same_seed_same_forecast() {
        let first = forecast(&mut SeededRandom::from_seed(1234), today(), 7).unwrap();
        let second = forecast(&mut SeededRandom::from_seed(1234), today(), 7).unwrap();

        assert_eq!(first, second);
        assert_eq!(render_forecast(&first), render_forecast(&second));
    }

    #[test]
    fn test_dates_follow_today() {
        let days = forecast(&mut SeededRandom::from_seed(5), today(), 4).unwrap();
        let dates: Vec<String> = days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(
            dates,
            vec!["2024-12-30", "2024-12-31", "2025-01-01", "2025-01-02"]
        );
    }

    #[test]
    fn test_temperatures_in_range() {
        let days = forecast(&mut SeededRandom::from_seed(99), today(), 200).unwrap();
        for day in &days {
            assert!((MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&day.temperature));
            assert!(Condition::ALL.contains(&day.condition));
        }
    }

    #[test]
    fn test_scripted_samples() {
        // condition index then temperature, per day
        let mut rng = scripted(vec![0, 4], vec![21, -3]);
        let days = forecast(&mut rng, today(), 2).unwrap();

        assert_eq!(days[0].condition, Condition::Sunny);
        assert_eq!(days[0].temperature, 21);
        assert_eq!(days[1].condition, Condition::Snowy);
        assert_eq!(days[1].temperature, -3);

        let rendered = render_forecast(&days);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2024-12-30"));
        assert!(lines[0].contains("Sunny"));
        assert!(lines[0].ends_with(" 21°C"));
        assert!(lines[1].contains("Snowy"));
        assert!(lines[1].ends_with(" -3°C"));
    }

    #[test]
    fn test_zero_days_is_empty() {
        let days = forecast(&mut SeededRandom::from_seed(1), today(), 0).unwrap();
        assert!(days.is_empty());
        assert_eq!(render_forecast(&days), "");
    }

    #[test]
    fn test_negative_days_rejected() {
        let err = forecast(&mut SeededRandom::from_seed(1), today(), -3).unwrap_err();
        assert!(matches!(err, GenError::InvalidArgument { name: "days", .. }));
    }

    #[test]
    fn test_days_past_last_date_rejected_up_front() {
        let err = forecast(&mut SeededRandom::from_seed(1), today(), i64::MAX).unwrap_err();
        assert!(matches!(err, GenError::InvalidArgument { name: "days", .. }));
    }

    #[test]
    fn test_nothing_sampled_when_days_rejected() {
        // no expectations set: any sample would fail the test
        let mut rng = crate::common::MockRng::new();
        let last = NaiveDate::MAX;
        assert!(forecast(&mut rng, last, 2).is_err());
        assert_eq!(forecast(&mut scripted(vec![3], vec![10]), last, 1).unwrap()[0].date, last);
    }
}
