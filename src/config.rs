use std::time::Duration;

pub const SITE_URL: &str = "https://akash-portfolio.dev";
pub const SITE_TITLE: &str = "Akash | AI Developer";
pub const SITE_DESCRIPTION: &str = "Portfolio of Akash, an AI Developer building computer vision, deep learning and real-time analytics systems.";
pub const RESUME_PATH: &str = "/Akash_Resume.pdf";
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub fn canonical_url(path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("{SITE_URL}/")
    } else {
        format!("{SITE_URL}/{path}")
    }
}

/// How long the success message stays up before the form closes itself.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(3000);

const WEBHOOK_PLACEHOLDER: &str = "YOUR_GOOGLE_APPS_SCRIPT_URL_HERE";

/// Settings for the contact form, resolved at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub webhook_url: Option<String>,
    pub auto_close: Duration,
}

impl ContactConfig {
    pub fn from_build_env() -> Self {
        Self::with_webhook(option_env!("CONTACT_WEBHOOK_URL"))
    }

    pub fn with_webhook(url: Option<&str>) -> Self {
        let webhook_url = url
            .map(str::trim)
            .filter(|u| !u.is_empty() && *u != WEBHOOK_PLACEHOLDER)
            .map(str::to_string);
        Self {
            webhook_url,
            auto_close: AUTO_CLOSE_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_placeholder_is_unconfigured() {
        assert_eq!(ContactConfig::with_webhook(None).webhook_url, None);
        assert_eq!(ContactConfig::with_webhook(Some("   ")).webhook_url, None);
        assert_eq!(
            ContactConfig::with_webhook(Some(WEBHOOK_PLACEHOLDER)).webhook_url,
            None
        );
    }

    #[test]
    fn test_canonical_url() {
        assert_eq!(canonical_url("/"), format!("{SITE_URL}/"));
        assert_eq!(canonical_url(""), format!("{SITE_URL}/"));
        assert_eq!(canonical_url("/missing/page"), format!("{SITE_URL}/missing/page"));
    }

    #[test]
    fn test_webhook_is_trimmed() {
        let config = ContactConfig::with_webhook(Some(" https://script.google.com/macros/s/abc/exec "));
        assert_eq!(
            config.webhook_url.as_deref(),
            Some("https://script.google.com/macros/s/abc/exec")
        );
        assert_eq!(config.auto_close, Duration::from_secs(3));
    }
}
