// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter, Result};

/// Bearer credential handed to every fetch and delete call. The pipeline never reads it
/// from ambient storage, never validates it, and never refreshes it; it is passed
/// through exactly as supplied by the authentication collaborator.
///
/// The [`Debug`] impl is redacted so the token can't leak into `tracing` output.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self { Self(token.into()) }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl Debug for AuthToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "AuthToken(***)") }
}

impl From<&str> for AuthToken {
    fn from(token: &str) -> Self { Self::new(token) }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self { Self(token) }
}
