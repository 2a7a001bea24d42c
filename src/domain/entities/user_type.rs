use serde::{Deserialize, Serialize};

/// Role a visitor picks when joining the waitlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Someone looking to hire ("klient" on the landing form).
    Client,
    /// A tradesperson offering services ("fachowiec" on the landing form).
    Provider,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Client => "client",
            UserType::Provider => "provider",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "client" | "klient" => Ok(UserType::Client),
            "provider" | "fachowiec" => Ok(UserType::Provider),
            _ => Err(format!(
                "Invalid user type: {}. Must be 'client' or 'provider'",
                s
            )),
        }
    }
}
