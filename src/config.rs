use std::net::SocketAddr;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub app_version: Option<String>,
    pub cors_permissive: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let bind_addr = parse_bind_addr(std::env::var("BIND_ADDR").ok().as_deref())?;
        let app_version = normalize_app_version(std::env::var("APP_VERSION").ok());
        let cors_permissive = match std::env::var("CORS_PERMISSIVE") {
            Ok(raw) => parse_flag("CORS_PERMISSIVE", &raw)?,
            Err(_) => false,
        };

        Ok(Config {
            bind_addr,
            app_version,
            cors_permissive,
        })
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<SocketAddr, ConfigError> {
    match raw {
        Some(raw) => raw
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw.to_string(),
                source,
            }),
        None => Ok(SocketAddr::from(([0, 0, 0, 0], 3000))),
    }
}

// An empty APP_VERSION counts as not configured
fn normalize_app_version(raw: Option<String>) -> Option<String> {
    raw.filter(|v| !v.is_empty())
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bind_addr() {
        assert_eq!(
            parse_bind_addr(Some("127.0.0.1:8080")).unwrap(),
            SocketAddr::from(([127, 0, 0, 1], 8080))
        );
        assert_eq!(
            parse_bind_addr(None).unwrap(),
            SocketAddr::from(([0, 0, 0, 0], 3000))
        );
        assert!(matches!(
            parse_bind_addr(Some("not-an-address")),
            Err(ConfigError::InvalidBindAddr { .. })
        ));
        assert!(matches!(
            parse_bind_addr(Some("127.0.0.1")),
            Err(ConfigError::InvalidBindAddr { .. })
        ));
    }

    #[test]
    fn test_normalize_app_version() {
        assert_eq!(
            normalize_app_version(Some("1.0.3".to_string())),
            Some("1.0.3".to_string())
        );
        assert_eq!(normalize_app_version(Some(String::new())), None);
        assert_eq!(normalize_app_version(None), None);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("X", "true").unwrap());
        assert!(parse_flag("X", "1").unwrap());
        assert!(parse_flag("X", "YES").unwrap());
        assert!(!parse_flag("X", "false").unwrap());
        assert!(!parse_flag("X", "0").unwrap());
        assert!(matches!(
            parse_flag("X", "maybe"),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }
}
