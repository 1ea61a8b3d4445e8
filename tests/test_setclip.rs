use rpawogen::error::PassGenError;
use rpawogen::setclip::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_clear_only_unmodified_content() {
        assert!(should_clear("test_password_456", "test_password_456"));
        assert!(!should_clear("different_content", "test_password_456"));
        assert!(!should_clear("", "test_password_456"));
    }

    #[test]
    fn test_empty_secret_never_clears() {
        assert!(!should_clear("", ""));
    }

    #[test]
    fn test_ready_status_accepted() {
        assert!(parse_daemon_status("ready\n").is_ok());
        assert!(parse_daemon_status(DAEMON_READY).is_ok());
    }

    #[test]
    fn test_helper_failure_reported_as_clipboard_error() {
        let err = parse_daemon_status("failed: no display server\n").unwrap_err();
        assert!(matches!(err, PassGenError::Clipboard { ref message } if message == "no display server"));
    }

    #[test]
    fn test_silent_helper_is_an_error() {
        // A helper that died before writing anything leaves an empty line.
        assert!(parse_daemon_status("").is_err());
        assert!(parse_daemon_status("garbage").is_err());
    }
}
