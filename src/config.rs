use std::env;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_key: String,
    pub provider_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5005".to_string())
                .parse()
                .expect("Failed to parse PORT"),
            api_key: env::var("API_KEY").expect("API_KEY must be set"),
            provider_url: env::var("PROVIDER_URL")
                .unwrap_or_else(|_| "https://mainnet.infura.io/v3".to_string()),
        }
    }

    /// Full JSON-RPC endpoint with the credential appended as the last path
    /// segment, the way hosted providers like Infura expect it.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.provider_url.trim_end_matches('/'),
            self.api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_credential() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 5005,
            api_key: "deadbeef".to_string(),
            provider_url: "https://mainnet.infura.io/v3".to_string(),
        };
        assert_eq!(config.endpoint(), "https://mainnet.infura.io/v3/deadbeef");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 5005,
            api_key: "deadbeef".to_string(),
            provider_url: "https://mainnet.infura.io/v3/".to_string(),
        };
        assert_eq!(config.endpoint(), "https://mainnet.infura.io/v3/deadbeef");
    }
}
