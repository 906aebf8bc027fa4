mod common;

use showcase_core::generators::sales::{SalesReport, MAX_SALE, MIN_SALE, MONTHS};
use showcase_core::SeededRandom;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scripted;

    #[test]
    fn test_statistics_from_figures() {
        let report = SalesReport::from_figures([
            1200, 3400, 9800, 1000, 5000, 7000, 2500, 8800, 4100, 6600, 3000, 1500,
        ]);

        assert_eq!(report.total, 53_900);
        assert_eq!(report.mean, 53_900 / 12);
        assert_eq!(report.best.month, "Mar");
        assert_eq!(report.best.amount, 9800);
        assert_eq!(report.worst.month, "Apr");
        assert_eq!(report.worst.amount, 1000);
    }

    #[test]
    fn test_ties_go_to_first_month() {
        let report = SalesReport::from_figures([
            5000, 9000, 2000, 9000, 5000, 2000, 9000, 3000, 2000, 4000, 6000, 7000,
        ]);

        assert_eq!(report.best.month, "Feb");
        assert_eq!(report.worst.month, "Mar");
    }

    #[test]
    fn test_flat_year() {
        let report = SalesReport::from_figures([4242; 12]);
        assert_eq!(report.best.month, "Jan");
        assert_eq!(report.worst.month, "Jan");
        assert_eq!(report.mean, 4242);
    }

    #[test]
    fn test_mean_truncates() {
        let mut amounts = [1000u32; 12];
        amounts[0] = 1011;
        let report = SalesReport::from_figures(amounts);
        assert_eq!(report.total, 12_011);
        assert_eq!(report.mean, 1000);
    }

    #[test]
    fn test_scripted_samples_in_month_order() {
        let values: Vec<i64> = (1..=12).map(|n| n * 700).collect();
        let mut rng = scripted(vec![], values.clone());
        let report = SalesReport::generate(&mut rng);

        for (figure, value) in report.figures.iter().zip(values.iter()) {
            assert_eq!(i64::from(figure.amount), *value);
        }
        assert_eq!(report.best.month, "Dec");
        assert_eq!(report.worst.month, "Jan");
    }

    #[test]
    fn test_generated_report_is_consistent() {
        let mut rng = SeededRandom::from_seed(31337);
        for _ in 0..25 {
            let report = SalesReport::generate(&mut rng);
            assert_eq!(report.figures.len(), 12);

            let labels: Vec<&str> = report.figures.iter().map(|f| f.month).collect();
            assert_eq!(labels, MONTHS.to_vec());

            let sum: u64 = report.figures.iter().map(|f| u64::from(f.amount)).sum();
            assert_eq!(report.total, sum);
            assert_eq!(report.mean, sum / 12);

            let max = report.figures.iter().map(|f| f.amount).max().unwrap();
            let min = report.figures.iter().map(|f| f.amount).min().unwrap();
            assert_eq!(report.best.amount, max);
            assert_eq!(report.worst.amount, min);

            for figure in &report.figures {
                let amount = i64::from(figure.amount);
                assert!((MIN_SALE..=MAX_SALE).contains(&amount));
            }
        }
    }

    #[test]
    fn test_display_lists_every_month() {
        let report = SalesReport::from_figures([2000; 12]);
        let text = report.to_string();

        for month in MONTHS {
            assert!(text.contains(&format!("{}: $", month)));
        }
        assert!(text.contains("Total: $24000"));
        assert!(text.contains("Average: $2000"));
        assert!(text.contains("Best month: Jan ($2000)"));
        assert!(text.contains("Worst month: Jan ($2000)"));
    }
}
