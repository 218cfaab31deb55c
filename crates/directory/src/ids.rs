//! Identifier generation for new employees.
//!
//! Generators only propose candidates; the [`Directory`](crate::Directory)
//! re-draws when a candidate is already live, so no scheme here has to be
//! globally unique on its own.

use uuid::Uuid;

use employee_hub_core::EmployeeId;

/// Source of candidate identifiers.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> EmployeeId;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> EmployeeId + Send,
{
    fn next_id(&mut self) -> EmployeeId {
        self()
    }
}

/// Time-ordered UUIDv7 text.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Ids;

impl IdGenerator for UuidV7Ids {
    fn next_id(&mut self) -> EmployeeId {
        EmployeeId::from(Uuid::now_v7().to_string())
    }
}

/// Decimal counter (`"4"`, `"5"`, ...), matching the short ids of seeded data.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> EmployeeId {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        EmployeeId::from(id.to_string())
    }
}
