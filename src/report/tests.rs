//! Unit tests for report assembly

#[cfg(test)]
mod tests {
    use super::super::{build, plain_text};
    use crate::config::AlertConfig;
    use crate::market::Series;

    fn row(date: &str, trade_value: &str, total_index: &str) -> Vec<String> {
        vec![
            date.to_string(),
            trade_value.to_string(),
            "1.25".to_string(),
            "1.10".to_string(),
            "0.95".to_string(),
            "-310 B".to_string(),
            "-120 B".to_string(),
            "45 B".to_string(),
            total_index.to_string(),
            "712,448".to_string(),
        ]
    }

    #[test]
    fn test_two_day_report_has_delta_but_no_averages() {
        let series = Series::from_rows(vec![
            row("1403/05/13", "3,200 B", "2,098,120"),
            row("1403/05/14", "4,100 B", "2,105,334"),
        ]);
        let report = build(&series, &AlertConfig::default());

        assert!(report.html.contains("1403/05/14"));
        assert!(report.html.contains("4,100 B"));
        assert!(report.html.contains("+900"));
        assert!(report.html.contains("+28.1%"));
        // 2 records: every moving-average window is omitted
        assert!(!report.html.contains("MA5"));
        assert!(!report.html.contains("Golden cross"));
    }

    #[test]
    fn test_report_sentiment_line() {
        let series = Series::from_rows(vec![
            row("1403/05/13", "2,000 B", "2,098,120"),
            row("1403/05/14", "2,500 B", "2,105,334"),
        ]);
        let report = build(&series, &AlertConfig::default());
        assert!(report.html.contains("Extreme Fear"));
        assert_eq!(report.gauge.position, 0.1);
    }

    #[test]
    fn test_golden_cross_report() {
        let mut rows: Vec<Vec<String>> = (0..31)
            .map(|i| row(&format!("1403/{:04}", i + 1), "100 B", "2,000,000"))
            .collect();
        rows.push(row("1403/0032", "4,000 B", "2,000,000"));
        let report = build(&Series::from_rows(rows), &AlertConfig::default());

        assert!(report.html.contains("Golden cross"));
        assert!(report.html.contains("Short-term trend (5d/10d): <b>up</b>"));
        assert!(report.html.contains("Main trend (10d/30d): <b>up</b>"));
    }

    #[test]
    fn test_new_all_time_high_flagged() {
        let series = Series::from_rows(vec![
            row("1403/05/13", "3,200 B", "2,098,120"),
            row("1403/05/14", "4,100 B", "2,105,334"),
        ]);
        let report = build(&series, &AlertConfig::default());
        assert!(report.html.contains("new all-time high"));
    }

    #[test]
    fn test_empty_series_still_reports() {
        let report = build(&Series::from_rows(vec![]), &AlertConfig::default());
        assert!(report.html.contains("No usable rows"));
    }

    #[test]
    fn test_plain_text_strips_markup() {
        let plain = plain_text("📊 <b>Tehran market</b>\n💵 <code>4,100 B</code>");
        assert!(plain.contains("Tehran market"));
        assert!(plain.contains("4,100 B"));
        assert!(!plain.contains('<'));
    }
}
