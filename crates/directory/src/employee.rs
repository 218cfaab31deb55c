use serde::{Deserialize, Serialize};

use employee_hub_core::{EmployeeId, Entity};

use crate::validation::{validate, FieldErrors, ValidDraft};

/// A committed directory entry.
///
/// Only the [`Directory`](crate::Directory) creates or mutates employees, and
/// it only accepts a [`ValidDraft`], so every field here already passed
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    email: String,
    position: String,
}

impl Employee {
    pub(crate) fn new(id: EmployeeId, draft: ValidDraft) -> Self {
        let EmployeeDraft {
            name,
            email,
            position,
        } = draft.into_inner();
        Self {
            id,
            name,
            email,
            position,
        }
    }

    /// Replace every field except the identifier.
    pub(crate) fn replace_details(&mut self, draft: ValidDraft) {
        let EmployeeDraft {
            name,
            email,
            position,
        } = draft.into_inner();
        self.name = name;
        self.email = email;
        self.position = position;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    /// Case-insensitive literal substring match over name, email and position.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [&self.name, &self.email, &self.position]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Entity for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Raw form input. No field is constrained until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub position: String,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            position: position.into(),
        }
    }

    /// Field errors for this draft (empty when valid).
    pub fn validate(&self) -> FieldErrors {
        validate(self)
    }
}

/// Pre-fill an edit form from an existing record.
impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            position: employee.position.clone(),
        }
    }
}
