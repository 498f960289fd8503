//! Weather API key management using the system keyring

use keyring::Entry;

use super::error::KeyStoreError;

/// Service name for keyring storage
const SERVICE_NAME: &str = "roadie";
/// Entry name for the API key
const API_KEY_ENTRY: &str = "openweathermap-api-key";
/// Environment variable that overrides every other source
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Manages the weather API key
pub struct WeatherKeyStore;

impl WeatherKeyStore {
    /// Resolve the key: environment, then config, then keyring
    pub fn resolve(configured: Option<&str>) -> Option<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Some(key.trim().to_string());
            }
        }
        if let Some(key) = configured.filter(|k| !k.trim().is_empty()) {
            return Some(key.trim().to_string());
        }
        match Self::get_api_key() {
            Ok(key) => Some(key),
            Err(e) => {
                tracing::debug!("No weather key in keyring: {}", e);
                None
            }
        }
    }

    /// Get the API key from system keyring
    pub fn get_api_key() -> Result<String, KeyStoreError> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_ENTRY)
            .map_err(|e| KeyStoreError::KeyringError(e.to_string()))?;

        entry.get_password().map_err(|e| KeyStoreError::KeyringError(e.to_string()))
    }

    /// Store the API key in system keyring
    pub fn set_api_key(key: &str) -> Result<(), KeyStoreError> {
        if !Self::validate_key_format(key) {
            return Err(KeyStoreError::InvalidApiKey);
        }

        let entry = Entry::new(SERVICE_NAME, API_KEY_ENTRY)
            .map_err(|e| KeyStoreError::KeyringError(e.to_string()))?;

        entry.set_password(key).map_err(|e| KeyStoreError::KeyringError(e.to_string()))
    }

    /// Delete the stored API key
    pub fn delete_api_key() -> Result<(), KeyStoreError> {
        let entry = Entry::new(SERVICE_NAME, API_KEY_ENTRY)
            .map_err(|e| KeyStoreError::KeyringError(e.to_string()))?;

        entry.delete_credential().map_err(|e| KeyStoreError::KeyringError(e.to_string()))
    }

    /// OpenWeatherMap keys are 32 hex characters
    fn validate_key_format(key: &str) -> bool {
        key.len() == 32 && key.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Mask an API key for display (show first and last 4 chars)
    pub fn mask_key(key: &str) -> String {
        let count = key.chars().count();
        if count <= 12 {
            return "*".repeat(count);
        }
        let prefix: String = key.chars().take(4).collect();
        let suffix: String = key.chars().skip(count - 4).collect();
        format!("{}...{}", prefix, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_key_format() {
        assert!(WeatherKeyStore::validate_key_format("0123456789abcdef0123456789ABCDEF"));
        assert!(!WeatherKeyStore::validate_key_format("invalid-key"));
        assert!(!WeatherKeyStore::validate_key_format("0123456789abcdef0123456789abcdeg"));
    }

    #[test]
    fn mask_key() {
        let masked = WeatherKeyStore::mask_key("0123456789abcdef0123456789abcdef");
        assert_eq!(masked, "0123...cdef");
        assert_eq!(WeatherKeyStore::mask_key("short"), "*****");
    }

    #[test]
    fn mask_key_handles_multibyte_chars() {
        assert_eq!(WeatherKeyStore::mask_key("ключ-ключ-ключ-ключ"), "ключ...ключ");
        assert_eq!(WeatherKeyStore::mask_key("ééé"), "***");
    }
}
