use std::env;

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT: Port to bind (default: "8080")
    pub fn from_env() -> Self {
        Self {
            ip: env::var("SERVICE_IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("SERVICE_PORT").unwrap_or_else(|_| "8080".to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    /// Base URL advertised in the OpenAPI document
    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.bind_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServerConfig {
        ServerConfig {
            ip: "0.0.0.0".to_string(),
            port: "9090".to_string(),
        }
    }

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        assert_eq!(config().bind_address(), "0.0.0.0:9090");
    }

    #[test]
    fn should_advertise_api_under_prefix() {
        assert_eq!(config().api_url(), "http://0.0.0.0:9090/api");
    }
}
