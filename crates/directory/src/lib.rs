//! Employee directory domain module.
//!
//! Owns the in-memory employee collection, the draft validator and the
//! page-level [`Hub`] session a UI layer drives. Everything here is plain,
//! synchronous logic: no IO, no rendering.

pub mod config;
pub mod directory;
pub mod employee;
pub mod hub;
pub mod ids;
pub mod notification;
pub mod validation;

pub use config::{HubConfig, SeedMode};
pub use directory::Directory;
pub use employee::{Employee, EmployeeDraft};
pub use hub::{Hub, HubError, DELETE_DIALOG_DESCRIPTION, DELETE_DIALOG_TITLE};
pub use ids::{IdGenerator, SequentialIds, UuidV7Ids};
pub use notification::{Notification, NotificationKind};
pub use validation::{validate, Field, FieldErrors, ValidDraft};

pub use employee_hub_core::{DomainError, DomainResult, EmployeeId, Entity};
