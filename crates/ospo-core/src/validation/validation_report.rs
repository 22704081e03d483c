use crate::{CoreError, CoreResult, FieldError};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// Outcome of validating one request form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Messages reported against a single field, in rule order
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|error| error.field == field)
            .map(|error| error.message.as_str())
            .collect()
    }

    /// Every failed rule as `field: message`, joined with "; "
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// `CoreError::Validation` listing every failed field, if any
    #[track_caller]
    pub fn check(&self) -> CoreResult<()> {
        if self.is_valid() {
            return Ok(());
        }

        Err(CoreError::Validation {
            message: self.summary(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
