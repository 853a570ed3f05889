//! Unit tests for the notifier

#[cfg(test)]
mod tests {
    use super::super::Notifier;
    use std::path::Path;

    #[test]
    fn test_disabled_notifier_swallows_sends() {
        let notifier = Notifier::disabled();
        assert!(!notifier.is_enabled());

        // No network, no file access; everything is a silent Ok
        tokio_test::block_on(async {
            assert!(notifier.send("hello").await.is_ok());
            assert!(notifier
                .send_audio(Path::new("/nonexistent.mp3"), "caption")
                .await
                .is_ok());
            assert!(notifier.error("ctx", "boom").await.is_ok());
            assert!(notifier.startup().await.is_ok());
        });
    }

    #[test]
    fn test_enabled_notifier_flag() {
        let notifier = Notifier::new("123:abc".to_string(), "42".to_string());
        assert!(notifier.is_enabled());
    }
}
