//! Page-level session around the [`Directory`].
//!
//! Holds the state the employee page keeps next to the collection: the search
//! box, which form is open, which deletion awaits confirmation, and the recent
//! notifications. Rendering is left to whatever UI drives the hub.

use std::collections::VecDeque;

use chrono::Utc;
use thiserror::Error;

use employee_hub_core::{DomainError, EmployeeId, Entity};

use crate::config::{HubConfig, SeedMode};
use crate::directory::Directory;
use crate::employee::{Employee, EmployeeDraft};
use crate::notification::{Notification, NotificationKind};
use crate::validation::{FieldErrors, ValidDraft};

pub const DELETE_DIALOG_TITLE: &str = "Delete Employee";
pub const DELETE_DIALOG_DESCRIPTION: &str =
    "Are you sure you want to remove this employee? This action cannot be undone.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HubError {
    /// The submitted draft has field errors; the form stays open.
    #[error("draft is invalid: {0}")]
    Invalid(FieldErrors),

    /// `save` was called while no form is open.
    #[error("no employee form is open")]
    FormClosed,

    /// `confirm_delete` was called with no deletion awaiting confirmation.
    #[error("no deletion is pending")]
    NothingPending,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// What the open form will do on save.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Form {
    Create,
    Edit(EmployeeId),
}

#[derive(Debug)]
pub struct Hub {
    directory: Directory,
    search_term: String,
    form: Option<Form>,
    pending_delete: Option<EmployeeId>,
    notifications: VecDeque<Notification>,
    notification_limit: usize,
}

impl Hub {
    pub fn new(directory: Directory, notification_limit: usize) -> Self {
        Self {
            directory,
            search_term: String::new(),
            form: None,
            pending_delete: None,
            notifications: VecDeque::new(),
            notification_limit,
        }
    }

    pub fn from_config(config: &HubConfig) -> Self {
        let directory = match config.seed {
            SeedMode::Sample => Directory::sample(),
            SeedMode::Empty => Directory::new(),
        };
        tracing::debug!(
            seed = ?config.seed,
            employees = directory.len(),
            "employee hub initialised"
        );
        Self::new(directory, config.notification_limit)
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    // ---- search ----

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Employees matching the current search term, in display order.
    pub fn visible(&self) -> Vec<Employee> {
        self.directory.list(&self.search_term)
    }

    // ---- add / edit form ----

    pub fn form_open(&self) -> bool {
        self.form.is_some()
    }

    /// Identifier being edited, if the open form is an edit form.
    pub fn editing(&self) -> Option<&EmployeeId> {
        match &self.form {
            Some(Form::Edit(id)) => Some(id),
            _ => None,
        }
    }

    /// Open a blank "add" form and return its initial values.
    pub fn open_create(&mut self) -> EmployeeDraft {
        self.form = Some(Form::Create);
        EmployeeDraft::default()
    }

    /// Open the edit form for `id`, pre-filled with its current values.
    pub fn open_edit(&mut self, id: &EmployeeId) -> Result<EmployeeDraft, HubError> {
        let employee = self
            .directory
            .get(id)
            .ok_or_else(|| DomainError::not_found(id))?;
        let draft = EmployeeDraft::from(employee);
        self.form = Some(Form::Edit(id.clone()));
        Ok(draft)
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Submit the open form.
    ///
    /// On any error the form stays open and the directory is unchanged.
    pub fn save(&mut self, draft: EmployeeDraft) -> Result<Notification, HubError> {
        let form = self.form.clone().ok_or(HubError::FormClosed)?;
        let draft = ValidDraft::try_from(draft).map_err(HubError::Invalid)?;

        let (kind, employee) = match form {
            Form::Create => (NotificationKind::Added, self.directory.create(draft)),
            Form::Edit(id) => (NotificationKind::Updated, self.directory.update(&id, draft)?),
        };

        self.form = None;
        Ok(self.notify(kind, &employee))
    }

    // ---- delete confirmation ----

    pub fn pending_delete(&self) -> Option<&EmployeeId> {
        self.pending_delete.as_ref()
    }

    /// Ask for confirmation before removing `id`.
    pub fn request_delete(&mut self, id: &EmployeeId) -> Result<(), HubError> {
        if !self.directory.contains(id) {
            return Err(DomainError::not_found(id).into());
        }
        self.pending_delete = Some(id.clone());
        Ok(())
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Remove the employee awaiting confirmation.
    ///
    /// The pending request is consumed even when the record has meanwhile
    /// disappeared, in which case `NotFound` is returned.
    pub fn confirm_delete(&mut self) -> Result<Notification, HubError> {
        let id = self.pending_delete.take().ok_or(HubError::NothingPending)?;
        let removed = self.directory.delete(&id)?;

        if self.editing() == Some(&id) {
            self.form = None;
        }

        Ok(self.notify(NotificationKind::Removed, &removed))
    }

    // ---- notifications ----

    /// Recent notifications, oldest first.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> + '_ {
        self.notifications.iter()
    }

    /// Take every stored notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    fn notify(&mut self, kind: NotificationKind, employee: &Employee) -> Notification {
        let notification = Notification::new(kind, employee.id().clone(), employee.name(), Utc::now());
        tracing::info!(
            event_type = kind.event_type(),
            employee_id = %employee.id(),
            "{}",
            notification.description
        );

        self.notifications.push_back(notification.clone());
        while self.notifications.len() > self.notification_limit {
            self.notifications.pop_front();
        }
        notification
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Field, EMAIL_INVALID, NAME_REQUIRED};

    fn hub() -> Hub {
        Hub::from_config(&HubConfig::default())
    }

    fn id(s: &str) -> EmployeeId {
        EmployeeId::from(s)
    }

    #[test]
    fn search_narrows_visible_rows() {
        let mut hub = hub();
        assert_eq!(hub.visible().len(), 3);

        hub.set_search("chen");
        let rows = hub.visible();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name(), "Michael Chen");

        hub.set_search("");
        assert_eq!(hub.visible().len(), 3);
    }

    #[test]
    fn create_flow_adds_and_notifies() {
        let mut hub = hub();
        let blank = hub.open_create();
        assert_eq!(blank, EmployeeDraft::default());
        assert!(hub.form_open());
        assert_eq!(hub.editing(), None);

        let note = hub
            .save(EmployeeDraft::new("Dana Scully", "dana@fbi.gov", "Agent"))
            .unwrap();

        assert_eq!(note.kind, NotificationKind::Added);
        assert_eq!(note.title, "Employee Added");
        assert_eq!(note.description, "Dana Scully has been added to the team.");
        assert!(!hub.form_open());
        assert_eq!(hub.visible().last().unwrap().name(), "Dana Scully");
        assert_eq!(hub.notifications().count(), 1);
    }

    #[test]
    fn edit_flow_prefills_and_updates_in_place() {
        let mut hub = hub();
        let mut draft = hub.open_edit(&id("3")).unwrap();
        assert_eq!(draft.name, "Emily Rodriguez");
        assert_eq!(hub.editing(), Some(&id("3")));

        draft.position = "Design Lead".to_string();
        let note = hub.save(draft).unwrap();

        assert_eq!(note.kind, NotificationKind::Updated);
        assert_eq!(note.description, "Emily Rodriguez has been updated successfully.");
        let rows = hub.visible();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].id(), &id("3"));
        assert_eq!(rows[2].position(), "Design Lead");
    }

    #[test]
    fn invalid_save_keeps_form_open() {
        let mut hub = hub();
        hub.open_create();

        let err = hub.save(EmployeeDraft::new("", "bad", "x")).unwrap_err();
        let errors = match err {
            HubError::Invalid(errors) => errors,
            other => panic!("expected field errors, got {other:?}"),
        };
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));

        assert!(hub.form_open());
        assert_eq!(hub.directory().len(), 3);
        assert_eq!(hub.notifications().count(), 0);
    }

    #[test]
    fn save_without_open_form_is_rejected() {
        let mut hub = hub();
        let err = hub
            .save(EmployeeDraft::new("Ann", "ann@co.io", "Dev"))
            .unwrap_err();
        assert_eq!(err, HubError::FormClosed);
        assert_eq!(hub.directory().len(), 3);
    }

    #[test]
    fn open_edit_of_unknown_employee_fails() {
        let mut hub = hub();
        let err = hub.open_edit(&id("42")).unwrap_err();
        assert_eq!(err, HubError::Domain(DomainError::NotFound(id("42"))));
        assert!(!hub.form_open());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut hub = hub();
        hub.request_delete(&id("1")).unwrap();
        assert_eq!(hub.pending_delete(), Some(&id("1")));
        assert_eq!(hub.directory().len(), 3);

        hub.cancel_delete();
        assert_eq!(hub.pending_delete(), None);
        assert_eq!(hub.confirm_delete().unwrap_err(), HubError::NothingPending);

        hub.request_delete(&id("1")).unwrap();
        let note = hub.confirm_delete().unwrap();
        assert_eq!(note.title, "Employee Removed");
        assert_eq!(note.description, "Sarah Johnson has been removed from the team.");
        assert_eq!(hub.pending_delete(), None);
        assert_eq!(hub.directory().len(), 2);
    }

    #[test]
    fn request_delete_of_unknown_is_not_found() {
        let mut hub = hub();
        let err = hub.request_delete(&id("nope")).unwrap_err();
        assert!(matches!(err, HubError::Domain(DomainError::NotFound(_))));
        assert_eq!(hub.pending_delete(), None);
    }

    #[test]
    fn deleting_the_edited_employee_closes_the_form() {
        let mut hub = hub();
        hub.open_edit(&id("2")).unwrap();
        hub.request_delete(&id("2")).unwrap();
        hub.confirm_delete().unwrap();

        assert!(!hub.form_open());
    }

    #[test]
    fn notification_history_is_bounded() {
        let mut hub = Hub::new(Directory::new(), 2);
        for name in ["A", "B", "C"] {
            hub.open_create();
            hub.save(EmployeeDraft::new(name, "x@y.zz", "Dev")).unwrap();
        }

        let kept: Vec<String> = hub.notifications().map(|n| n.description.clone()).collect();
        assert_eq!(
            kept,
            vec![
                "B has been added to the team.".to_string(),
                "C has been added to the team.".to_string(),
            ]
        );

        assert_eq!(hub.drain_notifications().len(), 2);
        assert_eq!(hub.notifications().count(), 0);
    }

    #[test]
    fn empty_seed_starts_empty() {
        let hub = Hub::from_config(&HubConfig {
            seed: SeedMode::Empty,
            ..HubConfig::default()
        });
        assert!(hub.visible().is_empty());
    }
}
