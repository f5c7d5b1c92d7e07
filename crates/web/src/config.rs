// =============================================================================
// Portfolio Web - Site Configuration
// =============================================================================
// Table of Contents:
// 1. Defaults
// 2. Site Config
// 3. Tests
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Defaults
// -----------------------------------------------------------------------------

/// Hosted form endpoint that receives contact submissions.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xeokqowv";

/// Direct-download link for the resume PDF.
pub const DEFAULT_RESUME_URL: &str =
    "https://drive.google.com/uc?export=download&id=1bvJSHc3hA1gLhSWoAvgg-1YbLJRnxpMT";

/// Suggested local filename for the resume download.
pub const RESUME_FILENAME: &str = "Rahul_Singh_Rawat_Resume.pdf";

// -----------------------------------------------------------------------------
// 2. Site Config
// -----------------------------------------------------------------------------

/// Where the resume lives and what the browser should call it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResumeConfig {
    pub url: String,
    pub filename: String,
}

/// Site configuration provided via Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Build environment ("development", "production", ...).
    pub environment: String,

    /// Contact form POST target.
    pub form_endpoint: String,

    /// Resume download target.
    pub resume: ResumeConfig,
}

impl SiteConfig {
    /// Resolve configuration from compile-time environment variables.
    pub fn new() -> Self {
        Self::from_overrides(
            option_env!("ENVIRONMENT"),
            option_env!("FORM_ENDPOINT"),
            option_env!("RESUME_URL"),
        )
    }

    /// Build a config from optional overrides, falling back to the defaults.
    pub fn from_overrides(
        environment: Option<&str>,
        form_endpoint: Option<&str>,
        resume_url: Option<&str>,
    ) -> Self {
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|v| !v.is_empty())
        }

        Self {
            environment: non_empty(environment).unwrap_or("production").to_string(),
            form_endpoint: non_empty(form_endpoint)
                .unwrap_or(DEFAULT_FORM_ENDPOINT)
                .to_string(),
            resume: ResumeConfig {
                url: non_empty(resume_url).unwrap_or(DEFAULT_RESUME_URL).to_string(),
                filename: RESUME_FILENAME.to_string(),
            },
        }
    }

    /// Whether this is a local development build.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Console log level for this build.
    pub fn log_level(&self) -> log::Level {
        if self.is_development() {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_overrides(None, None, None);

        assert_eq!(config.environment, "production");
        assert_eq!(config.form_endpoint, DEFAULT_FORM_ENDPOINT);
        assert_eq!(config.resume.url, DEFAULT_RESUME_URL);
        assert_eq!(config.resume.filename, "Rahul_Singh_Rawat_Resume.pdf");
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_overrides(
            Some("development"),
            Some("http://localhost:9000/form"),
            Some("http://localhost:9000/resume.pdf"),
        );

        assert!(config.is_development());
        assert_eq!(config.form_endpoint, "http://localhost:9000/form");
        assert_eq!(config.resume.url, "http://localhost:9000/resume.pdf");
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_blank_overrides_fall_back() {
        let config = SiteConfig::from_overrides(Some(""), Some("   "), None);

        assert_eq!(config.environment, "production");
        assert_eq!(config.form_endpoint, DEFAULT_FORM_ENDPOINT);
    }
}
