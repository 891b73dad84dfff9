//! Ownership marker for privately held inputs
//!
//! In a secure-computation setting each input belongs to one party. The
//! marker records that party at the boundary; the numeric code never looks at
//! it and only ever sees the wrapped value.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Index of the party that owns an input
pub type Party = u8;

/// A value tagged as privately held by a party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Private<T> {
    party: Party,
    value: T,
}

impl<T> Private<T> {
    pub fn new(party: Party, value: T) -> Self {
        Self { party, value }
    }

    /// Party owning the value
    pub fn party(&self) -> Party {
        self.party
    }

    /// Drop the marker and return the value
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Private<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}
