use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the prediction service lives.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// The service running on this machine with its default port.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { base_url: String },
}

impl Environment {
    /// Returns the base URL all endpoints are resolved against.
    pub fn base_url(&self) -> String {
        match self {
            Environment::Local => "http://127.0.0.1:5000".to_string(),
            Environment::Custom { base_url } => base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Err(()),
            "local" => Ok(Environment::Local),
            lower if lower.starts_with("http://") || lower.starts_with("https://") => {
                Ok(Environment::Custom {
                    base_url: trimmed.to_string(),
                })
            }
            _ => Err(()),
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
        write!(f, "Environment::{}, URL: {}", self, self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "https://iris.example.com/".parse::<Environment>(),
            Ok(Environment::Custom {
                base_url: "https://iris.example.com/".to_string()
            })
        );
        assert!("ftp://nope".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }
}
