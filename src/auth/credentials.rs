use crate::configuration::LoginSettings;

/// Decides whether a username/password pair may log in.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one configured pair, compared verbatim.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl From<&LoginSettings> for StaticCredentials {
    fn from(settings: &LoginSettings) -> Self {
        Self::new(settings.username.clone(), settings.password.clone())
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        // an unset account never matches empty input
        if self.username.is_empty() {
            return false;
        }
        username == self.username && password == self.password
    }
}
