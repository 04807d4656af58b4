use crate::shared::core::errors::{Classify, ErrorKind};
use crate::shared::core::primitives::is_blank;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A site employees can be scheduled at and clock in against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobLocation {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub is_active: bool,
}

impl JobLocation {
    pub fn from_draft(id: impl Into<String>, draft: JobLocationDraft, is_active: bool) -> Self {
        Self {
            id: id.into(),
            name: draft.name.trim().to_string(),
            address: draft.address.trim().to_string(),
            city: draft.city.trim().to_string(),
            state: draft.state.trim().to_string(),
            zip: draft.zip.trim().to_string(),
            is_active,
        }
    }

    /// Label used wherever a location is picked or recorded on a time entry.
    pub fn display_name(&self) -> String {
        format!("{} - {}, {}", self.name, self.city, self.state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobLocationDraft {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("job location {0} is required")]
pub struct MissingJobLocationField(pub &'static str);

impl Classify for MissingJobLocationField {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

impl JobLocationDraft {
    pub fn validate(&self) -> Result<(), MissingJobLocationField> {
        let fields = [
            ("name", &self.name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zip", &self.zip),
        ];
        match fields.into_iter().find(|(_, value)| is_blank(value)) {
            Some((field, _)) => Err(MissingJobLocationField(field)),
            None => Ok(()),
        }
    }
}
