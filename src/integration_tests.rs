//! End-to-end pipeline tests over an in-memory page fixture
//!
//! Exercises scrape extraction → series construction → indicators →
//! report assembly without any network access.

#[cfg(test)]
mod tests {
    use crate::client::extract_rows;
    use crate::config::AlertConfig;
    use crate::market::Series;
    use crate::report;
    use crate::sentiment::FearGreed;

    /// Two trading days, newest first, as the page renders them
    const PAGE: &str = r#"
<html><body>
  <table id="history">
    <thead><tr><th>Date</th></tr></thead>
    <tbody>
      <tr>
        <td>1403/05/14</td><td>4,100 B</td><td>1.25</td><td>1.10</td><td>0.95</td>
        <td>-310 B</td><td>-120 B</td><td>45 B</td><td>2,105,334</td><td>712,448</td>
      </tr>
      <tr>
        <td>1403/05/13</td><td>3,200 B</td><td>0.98</td><td>1.05</td><td>0.97</td>
        <td>80 B</td><td>-60 B</td><td>30 B</td><td>2,098,120</td><td>710,002</td>
      </tr>
      <tr>
        <td>1403/05/12</td><td>suspended</td><td>-</td><td>-</td><td>-</td>
        <td>-</td><td>-</td><td>-</td><td>-</td><td>-</td>
      </tr>
    </tbody>
  </table>
</body></html>
"#;

    #[test]
    fn test_page_to_report_pipeline() {
        let rows = extract_rows(PAGE, "table#history").unwrap();
        assert_eq!(rows.len(), 3);

        // The suspended day parses to zero trade value and is discarded
        let series = Series::from_rows(rows);
        assert_eq!(series.len(), 2);
        assert_eq!(series.last().unwrap().date, "1403/05/14");

        let report = report::build(&series, &AlertConfig::default());

        // Day-over-day: 3200 -> 4100
        assert!(report.html.contains("+900"));
        assert!(report.html.contains("+28.1%"));
        // Too short for any moving average or crossover output
        assert!(!report.html.contains("MA5"));
        assert!(!report.html.contains("trend (5d/10d)"));
        // 4100 B sits in the fear band
        assert_eq!(report.gauge.bucket, FearGreed::Fear);
    }

    #[test]
    fn test_plain_rendition_is_markup_free() {
        let rows = extract_rows(PAGE, "table#history").unwrap();
        let series = Series::from_rows(rows);
        let report = report::build(&series, &AlertConfig::default());

        let plain = report::plain_text(&report.html);
        assert!(!plain.contains('<'));
        assert!(plain.contains("Trade value"));
    }
}
