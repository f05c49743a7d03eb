use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address {value:?}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("invalid boolean for {name}: {value:?} (expected true/false/1/0/yes/no)")]
    InvalidFlag { name: &'static str, value: String },
}
