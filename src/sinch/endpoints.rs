//! Base addresses of the Sinch API families.

use serde::{Deserialize, Serialize};

use super::projects::Region;

/// Placeholder substituted with the project region in the SMS base URL.
pub const REGION_PLACEHOLDER: &str = "{region}";

pub const DEFAULT_SMS_BASE_URL: &str = "https://{region}.sms.api.sinch.com";
pub const DEFAULT_NUMBERS_BASE_URL: &str = "https://numbers.api.sinch.com";
pub const DEFAULT_VERIFICATION_BASE_URL: &str = "https://verification.api.sinch.com";
pub const DEFAULT_SUBPROJECTS_BASE_URL: &str = "https://subproject.api.sinch.com";

/// Base URLs for each remote family.
///
/// Only the SMS address depends on the project (through its region); the
/// others are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinchEndpoints {
    /// SMS base URL template, may contain `{region}`.
    pub sms: String,
    pub numbers: String,
    pub verification: String,
    pub subprojects: String,
}

impl Default for SinchEndpoints {
    fn default() -> Self {
        Self {
            sms: DEFAULT_SMS_BASE_URL.to_string(),
            numbers: DEFAULT_NUMBERS_BASE_URL.to_string(),
            verification: DEFAULT_VERIFICATION_BASE_URL.to_string(),
            subprojects: DEFAULT_SUBPROJECTS_BASE_URL.to_string(),
        }
    }
}

impl SinchEndpoints {
    /// Load endpoint overrides from environment variables.
    ///
    /// `SINCH_SMS_BASE_URL`, `SINCH_NUMBERS_BASE_URL`,
    /// `SINCH_VERIFICATION_BASE_URL` and `SINCH_SUBPROJECTS_BASE_URL` replace
    /// the public Sinch hosts (useful for sandboxes and mocks).
    pub fn from_env() -> Self {
        let mut endpoints = Self::default();
        let overrides = [
            ("SINCH_SMS_BASE_URL", &mut endpoints.sms),
            ("SINCH_NUMBERS_BASE_URL", &mut endpoints.numbers),
            ("SINCH_VERIFICATION_BASE_URL", &mut endpoints.verification),
            ("SINCH_SUBPROJECTS_BASE_URL", &mut endpoints.subprojects),
        ];
        for (key, slot) in overrides {
            if let Ok(value) = std::env::var(key) {
                let value = value.trim();
                if !value.is_empty() {
                    *slot = value.to_string();
                }
            }
        }
        endpoints
    }

    /// Point every family at the same base URL.
    pub fn uniform(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            sms: base_url.clone(),
            numbers: base_url.clone(),
            verification: base_url.clone(),
            subprojects: base_url,
        }
    }

    /// SMS base URL for the given region.
    pub fn sms_base_url(&self, region: Region) -> String {
        trim_base(&self.sms.replace(REGION_PLACEHOLDER, region.as_str()))
    }

    pub fn numbers_base_url(&self) -> String {
        trim_base(&self.numbers)
    }

    pub fn verification_base_url(&self) -> String {
        trim_base(&self.verification)
    }

    pub fn subprojects_base_url(&self) -> String {
        trim_base(&self.subprojects)
    }
}

fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sms_url_templated_by_region() {
        let endpoints = SinchEndpoints::default();
        assert_eq!(
            endpoints.sms_base_url(Region::Eu),
            "https://eu.sms.api.sinch.com"
        );
        assert_eq!(
            endpoints.sms_base_url(Region::Ca),
            "https://ca.sms.api.sinch.com"
        );
    }

    #[test]
    fn test_fixed_families_ignore_region() {
        let endpoints = SinchEndpoints::default();
        assert_eq!(endpoints.numbers_base_url(), "https://numbers.api.sinch.com");
        assert_eq!(
            endpoints.verification_base_url(),
            "https://verification.api.sinch.com"
        );
        assert_eq!(
            endpoints.subprojects_base_url(),
            "https://subproject.api.sinch.com"
        );
    }

    #[test]
    fn test_uniform_strips_trailing_slash() {
        let endpoints = SinchEndpoints::uniform("http://127.0.0.1:9999/");
        assert_eq!(endpoints.sms_base_url(Region::Br), "http://127.0.0.1:9999");
        assert_eq!(endpoints.numbers_base_url(), "http://127.0.0.1:9999");
    }
}
