//! The directory controller: sole owner of the employee collection.

use std::collections::HashSet;

use employee_hub_core::{DomainError, DomainResult, EmployeeId, Entity};

use crate::employee::{Employee, EmployeeDraft};
use crate::ids::{IdGenerator, SequentialIds, UuidV7Ids};
use crate::validation::ValidDraft;

/// Records the page starts with when seeded with sample data.
const SAMPLE: [(&str, &str, &str, &str); 3] = [
    (
        "1",
        "Sarah Johnson",
        "sarah.johnson@company.com",
        "Senior Frontend Developer",
    ),
    (
        "2",
        "Michael Chen",
        "michael.chen@company.com",
        "Product Manager",
    ),
    (
        "3",
        "Emily Rodriguez",
        "emily.rodriguez@company.com",
        "UX Designer",
    ),
];

/// Ordered, in-memory collection of employees.
///
/// Insertion order is display order. Every mutation is all-or-nothing: a failed
/// call leaves the collection exactly as it was.
pub struct Directory {
    employees: Vec<Employee>,
    /// Every id this directory has held, including deleted ones. Never shrinks.
    issued: HashSet<EmployeeId>,
    ids: Box<dyn IdGenerator>,
}

impl core::fmt::Debug for Directory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Directory")
            .field("employees", &self.employees)
            .finish_non_exhaustive()
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    /// Empty directory assigning UUIDv7 identifiers.
    pub fn new() -> Self {
        Self::with_id_generator(UuidV7Ids)
    }

    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            employees: Vec::new(),
            issued: HashSet::new(),
            ids: Box::new(ids),
        }
    }

    /// Directory holding `records` in the given order.
    ///
    /// Fails with [`DomainError::Conflict`] if two records share an id.
    pub fn from_records<I>(ids: impl IdGenerator + 'static, records: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = (EmployeeId, ValidDraft)>,
    {
        let mut directory = Self::with_id_generator(ids);
        for (id, draft) in records {
            if directory.contains(&id) {
                return Err(DomainError::conflict(format!("duplicate employee id: {id}")));
            }
            directory.issued.insert(id.clone());
            directory.employees.push(Employee::new(id, draft));
        }
        Ok(directory)
    }

    /// The three sample employees, with later ids counting up from `4`.
    pub fn sample() -> Self {
        let employees: Vec<Employee> = SAMPLE
            .iter()
            .map(|(id, name, email, position)| {
                Employee::new(
                    EmployeeId::from(*id),
                    ValidDraft::assume_valid(EmployeeDraft::new(*name, *email, *position)),
                )
            })
            .collect();
        let issued = employees.iter().map(|e| e.id().clone()).collect();
        Self {
            employees,
            issued,
            ids: Box::new(SequentialIds::starting_at(SAMPLE.len() as u64 + 1)),
        }
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    /// All employees in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.employees.iter()
    }

    /// Employees whose name, email or position contains `search_term`,
    /// ignoring case, in display order.
    ///
    /// The term is literal text; an empty term returns everyone.
    pub fn list(&self, search_term: &str) -> Vec<Employee> {
        let needle = search_term.to_lowercase();
        self.employees
            .iter()
            .filter(|e| e.matches_lowercase(&needle))
            .cloned()
            .collect()
    }

    /// Append a new employee under an identifier this directory has never
    /// held before, not even by a since-deleted record.
    pub fn create(&mut self, draft: ValidDraft) -> Employee {
        let id = self.fresh_id();
        self.issued.insert(id.clone());
        let employee = Employee::new(id, draft);
        self.employees.push(employee.clone());

        tracing::info!(employee_id = %employee.id(), "employee created");
        employee
    }

    /// Replace name, email and position of `id` in place.
    pub fn update(&mut self, id: &EmployeeId, draft: ValidDraft) -> DomainResult<Employee> {
        let Some(index) = self.index_of(id) else {
            tracing::warn!(employee_id = %id, "update of unknown employee");
            return Err(DomainError::not_found(id));
        };

        let employee = &mut self.employees[index];
        employee.replace_details(draft);

        tracing::info!(employee_id = %id, "employee updated");
        Ok(employee.clone())
    }

    /// Remove `id`, returning the removed record.
    ///
    /// Deleting an id that is not live (never existed, or already deleted)
    /// fails with [`DomainError::NotFound`].
    pub fn delete(&mut self, id: &EmployeeId) -> DomainResult<Employee> {
        let Some(index) = self.index_of(id) else {
            tracing::warn!(employee_id = %id, "delete of unknown employee");
            return Err(DomainError::not_found(id));
        };

        let removed = self.employees.remove(index);

        tracing::info!(employee_id = %id, "employee deleted");
        Ok(removed)
    }

    fn index_of(&self, id: &EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| e.id() == id)
    }

    fn fresh_id(&mut self) -> EmployeeId {
        loop {
            let candidate = self.ids.next_id();
            if !self.issued.contains(&candidate) {
                return candidate;
            }
            tracing::debug!(employee_id = %candidate, "generated id already issued; drawing again");
        }
    }
}
