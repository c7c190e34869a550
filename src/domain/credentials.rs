use std::fmt;

/// Login material for the remote account.
///
/// The value is immutable: a one-time code is attached by building a new value
/// with [`Credentials::with_one_time_code`].
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    login: String,
    password: String,
    one_time_code: Option<String>,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            one_time_code: None,
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn one_time_code(&self) -> Option<&str> {
        self.one_time_code.as_deref()
    }

    pub fn with_one_time_code(&self, code: impl Into<String>) -> Self {
        Self {
            login: self.login.clone(),
            password: self.password.clone(),
            one_time_code: Some(code.into()),
        }
    }

    /// Drops the one-time code; codes are never persisted.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn without_one_time_code(&self) -> Self {
        Self::new(self.login.clone(), self.password.clone())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .field(
                "one_time_code",
                &self.one_time_code.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
