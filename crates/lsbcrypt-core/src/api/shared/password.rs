use std::fmt::{self, Debug, Formatter};

use zeroize::Zeroizing;

/// An optional password, wiped from memory once the builder is dropped.
#[derive(Default, Clone)]
pub struct Password(Option<Zeroizing<String>>);

impl Password {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_ref().map(|password| password.as_str())
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.as_deref() {
            Some(password) => write!(f, "Password({})", "*".repeat(password.len())),
            None => write!(f, "Password(None)"),
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password.map(Zeroizing::new))
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(Some(Zeroizing::new(password.to_string())))
    }
}
