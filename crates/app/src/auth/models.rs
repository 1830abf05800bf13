//! Identity models.

/// Who a request was made by, as far as token verification could tell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Identity {
    /// The bearer token was verified and carried this email.
    Verified(String),

    /// No token was sent, or it failed verification.
    #[default]
    Anonymous,
}

impl Identity {
    /// The verified email, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Verified(email) => Some(email),
            Self::Anonymous => None,
        }
    }
}
