use std::fmt::{Debug, Display, Formatter};

/// Represents the indexer deployments the tracker can point at.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local indexer, the default deployment.
    #[default]
    Local,
    /// A custom indexer, selected with `--api-url`.
    Custom { api_base_url: String },
}

impl Environment {
    /// Returns the indexer API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:3000".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }

    /// Build a custom environment from a user-supplied base URL.
    pub fn custom(api_base_url: impl Into<String>) -> Self {
        Environment::Custom {
            api_base_url: api_base_url.into(),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_environment_keeps_its_url() {
        let env = Environment::custom("http://127.0.0.1:8080");
        assert_eq!(env.api_base_url(), "http://127.0.0.1:8080");
        assert_eq!(env.to_string(), "Custom");
    }

    #[test]
    fn local_is_the_default() {
        assert_eq!(Environment::default(), Environment::Local);
        assert_eq!(
            Environment::default().api_base_url(),
            "http://localhost:3000"
        );
    }
}
