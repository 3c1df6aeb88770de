//! Runtime configuration read from the environment.

/// Deployment environment. The OpenAPI document is only mounted outside
/// `Production`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    /// Anything other than "production" (case-insensitive) counts as
    /// development, so local runs get the docs route without setup.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("production") {
            AppEnv::Production
        } else {
            AppEnv::Development
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub env: AppEnv,
}

impl Config {
    /// Reads `PORT` and `APP_ENV`; unset or unparsable values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        let env = std::env::var("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);
        Self { port, env }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            env: AppEnv::Development,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_is_case_insensitive() {
        assert_eq!(AppEnv::parse("production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("Production"), AppEnv::Production);
        assert_eq!(AppEnv::parse("PRODUCTION"), AppEnv::Production);
    }

    #[test]
    fn everything_else_is_development() {
        assert_eq!(AppEnv::parse("development"), AppEnv::Development);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
        assert_eq!(AppEnv::parse(""), AppEnv::Development);
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.env, AppEnv::Development);
    }
}
