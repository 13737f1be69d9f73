//! Who the client talks as, and about which system.
//!
//! The token and the system are the only state that outlives a single call.

use std::fmt::{Debug, Formatter};

use serde::Deserialize;

use crate::api::error::{AuthenticationError, Error};

/// Identifier of a monitoring system as assigned by the vendor.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct SystemId(String);

impl From<String> for SystemId {
    fn from(system_id: String) -> Self {
        Self(system_id)
    }
}

impl From<&str> for SystemId {
    fn from(system_id: &str) -> Self {
        Self(system_id.to_owned())
    }
}

impl AsRef<str> for SystemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum State {
    Unauthenticated,

    /// Holds a token, but no system is resolved yet.
    Authenticated,

    /// Holds a token and a system: data calls are allowed.
    Ready,
}

#[derive(Default)]
pub struct Session {
    access_token: Option<String>,
    system_id: Option<SystemId>,
}

/// What a data call needs, borrowed from a [`Session`] in the [`State::Ready`] state.
pub struct Credentials<'a> {
    pub access_token: &'a str,
    pub system_id: &'a SystemId,
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state())
            .field("system_id", &self.system_id)
            .finish_non_exhaustive()
    }
}

impl Session {
    #[must_use]
    pub const fn state(&self) -> State {
        match (&self.access_token, &self.system_id) {
            (None, _) => State::Unauthenticated,
            (Some(_), None) => State::Authenticated,
            (Some(_), Some(_)) => State::Ready,
        }
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    #[must_use]
    pub const fn system_id(&self) -> Option<&SystemId> {
        self.system_id.as_ref()
    }

    pub(crate) fn authorize(&mut self, access_token: String) {
        self.access_token = Some(access_token);
    }

    /// Forget the token, keeping the resolved system.
    pub(crate) fn expire(&mut self) {
        self.access_token = None;
    }

    pub(crate) fn bind(&mut self, system_id: SystemId) {
        self.system_id = Some(system_id);
    }

    /// Ensure that a data call may be made.
    pub fn check(&self) -> Result<Credentials<'_>, Error> {
        let access_token = self.access_token.as_deref().ok_or(AuthenticationError::Missing)?;
        let system_id = self.system_id.as_ref().ok_or(Error::System)?;
        Ok(Credentials { access_token, system_id })
    }
}
