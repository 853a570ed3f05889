//! Tests for error types

#[cfg(test)]
mod tests {
    use super::super::error::BotError;

    #[test]
    fn test_error_display() {
        let err = BotError::Scrape("no <td> cells".to_string());
        assert_eq!(err.to_string(), "Scrape error: no <td> cells");

        let err = BotError::TableNotFound("https://example.ir".to_string());
        assert_eq!(err.to_string(), "No history table found at https://example.ir");

        let err = BotError::Telegram("chat not found".to_string());
        assert_eq!(err.to_string(), "Telegram API error: chat not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: BotError = io.into();
        assert!(matches!(err, BotError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let err: BotError = json.into();
        assert!(matches!(err, BotError::Json(_)));
    }
}
