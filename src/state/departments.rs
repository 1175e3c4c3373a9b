//! Department directory operations.

use super::{WorkforceState, new_id};
use crate::error::{AppError, Result};
use crate::models::{CreateDepartment, Department, Task, UpdateDepartment};
use crate::store::Storage;

fn non_blank(value: &str, what: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{what} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

impl<S: Storage> WorkforceState<S> {
    /// Get department by ID.
    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    /// Find a department by ID or case-insensitive name.
    pub fn resolve_department(&self, id_or_name: &str) -> Option<&Department> {
        let needle = id_or_name.trim();
        self.department(needle)
            .or_else(|| self.departments.iter().find(|d| d.name.eq_ignore_ascii_case(needle)))
    }

    /// The first department listing `user` as a member.
    pub fn department_for(&self, user: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.has_member(user))
    }

    fn department_index(&self, id: &str) -> Result<usize> {
        self.departments
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| AppError::not_found(format!("department {id}")))
    }

    /// Create a new department with no tasks or members.
    pub fn add_department(&mut self, data: CreateDepartment) -> Result<&Department> {
        let name = non_blank(&data.name, "Department name")?;

        let mut next = self.departments.clone();
        next.push(Department {
            id: new_id(),
            name,
            tasks: Vec::new(),
            members: Vec::new(),
            manager: None,
        });
        self.commit_departments(next)?;

        let dept = &self.departments[self.departments.len() - 1];
        tracing::info!("Added department '{}' ({})", dept.name, dept.id);
        Ok(dept)
    }

    /// Update an existing department. Only the name can change.
    pub fn update_department(&mut self, id: &str, data: UpdateDepartment) -> Result<&Department> {
        let idx = self.department_index(id)?;

        let mut next = self.departments.clone();
        if let Some(name) = data.name {
            next[idx].name = non_blank(&name, "Department name")?;
        }
        self.commit_departments(next)?;

        Ok(&self.departments[idx])
    }

    /// Append a task to a department.
    pub fn add_task(&mut self, department_id: &str, name: &str) -> Result<&Task> {
        let idx = self.department_index(department_id)?;
        let name = non_blank(name, "Task name")?;

        let mut next = self.departments.clone();
        next[idx].tasks.push(Task { id: new_id(), name });
        self.commit_departments(next)?;

        let dept = &self.departments[idx];
        tracing::info!("Added task to department '{}'", dept.name);
        Ok(&dept.tasks[dept.tasks.len() - 1])
    }

    /// Append a member to a department.
    pub fn add_member(&mut self, department_id: &str, member: &str) -> Result<()> {
        let idx = self.department_index(department_id)?;
        let member = non_blank(member, "Member name")?;

        let dept = &self.departments[idx];
        if dept.has_member(&member) {
            return Err(AppError::validation(format!(
                "{member} is already a member of {}",
                dept.name
            )));
        }

        let mut next = self.departments.clone();
        next[idx].members.push(member);
        self.commit_departments(next)
    }

    /// Set or clear the manager. A new manager must already be a member.
    pub fn assign_manager(&mut self, department_id: &str, member: Option<&str>) -> Result<()> {
        let idx = self.department_index(department_id)?;
        let manager = match member {
            Some(member) => {
                let member = non_blank(member, "Manager name")?;
                let dept = &self.departments[idx];
                if !dept.has_member(&member) {
                    return Err(AppError::validation(format!(
                        "{member} is not a member of {}",
                        dept.name
                    )));
                }
                tracing::info!("{} now manages '{}'", member, dept.name);
                Some(member)
            }
            None => None,
        };

        let mut next = self.departments.clone();
        next[idx].manager = manager;
        self.commit_departments(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;

    fn state_with_engineering() -> (WorkforceState<MemoryStorage>, String) {
        let mut state = WorkforceState::load(MemoryStorage::new()).unwrap();
        let id = state
            .add_department(CreateDepartment {
                name: "Engineering".to_string(),
            })
            .unwrap()
            .id
            .clone();
        (state, id)
    }

    #[test]
    fn test_add_department_starts_empty() {
        let (state, id) = state_with_engineering();
        let dept = state.department(&id).unwrap();
        assert_eq!(dept.name, "Engineering");
        assert!(dept.tasks.is_empty());
        assert!(dept.members.is_empty());
        assert!(dept.manager.is_none());
    }

    #[test]
    fn test_blank_department_rejected() {
        let mut state = WorkforceState::load(MemoryStorage::new()).unwrap();
        let err = state
            .add_department(CreateDepartment {
                name: "   ".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(state.departments().is_empty());
    }

    #[test]
    fn test_tasks_keep_insertion_order() {
        let (mut state, id) = state_with_engineering();
        state.add_task(&id, "Code Review").unwrap();
        state.add_task(&id, "Testing").unwrap();

        let names: Vec<_> = state.department(&id).unwrap().tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Code Review", "Testing"]);
    }

    #[test]
    fn test_add_to_unknown_department() {
        let (mut state, _) = state_with_engineering();
        assert!(matches!(state.add_task("nope", "X"), Err(AppError::NotFound(_))));
        assert!(matches!(state.add_member("nope", "alice"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_duplicate_member_rejected() {
        let (mut state, id) = state_with_engineering();
        state.add_member(&id, "alice").unwrap();
        assert!(state.add_member(&id, "alice").is_err());
        assert_eq!(state.department(&id).unwrap().members.len(), 1);
    }

    #[test]
    fn test_manager_must_be_member() {
        let (mut state, id) = state_with_engineering();
        state.add_member(&id, "alice").unwrap();

        assert!(state.assign_manager(&id, Some("mallory")).is_err());
        assert!(state.department(&id).unwrap().manager.is_none());

        state.assign_manager(&id, Some("alice")).unwrap();
        let dept = state.department(&id).unwrap();
        assert!(dept.is_manager("alice"));
        assert!(dept.has_member("alice"));

        state.assign_manager(&id, None).unwrap();
        assert!(state.department(&id).unwrap().manager.is_none());
    }

    #[test]
    fn test_manager_name_is_trimmed() {
        let (mut state, id) = state_with_engineering();
        state.add_member(&id, " alice").unwrap();

        state.assign_manager(&id, Some(" alice ")).unwrap();
        assert_eq!(state.department(&id).unwrap().manager.as_deref(), Some("alice"));

        assert!(matches!(state.assign_manager(&id, Some("  ")), Err(AppError::Validation(_))));
        assert_eq!(state.department(&id).unwrap().manager.as_deref(), Some("alice"));
    }

    #[test]
    fn test_rename_keeps_members_and_manager() {
        let (mut state, id) = state_with_engineering();
        state.add_member(&id, "alice").unwrap();
        state.assign_manager(&id, Some("alice")).unwrap();

        let dept = state
            .update_department(
                &id,
                UpdateDepartment {
                    name: Some("Platform".to_string()),
                },
            )
            .unwrap();
        assert_eq!(dept.name, "Platform");
        assert!(dept.is_manager("alice"));
    }

    #[test]
    fn test_resolve_department_and_user_lookup() {
        let (mut state, id) = state_with_engineering();
        state.add_member(&id, "alice").unwrap();

        assert_eq!(state.resolve_department("engineering").map(|d| d.id.as_str()), Some(id.as_str()));
        assert_eq!(state.resolve_department(&id).map(|d| d.name.as_str()), Some("Engineering"));
        assert_eq!(state.department_for("alice").map(|d| d.id.as_str()), Some(id.as_str()));
        assert!(state.department_for("bob").is_none());
    }

    #[test]
    fn test_mutations_are_persisted() {
        let storage = MemoryStorage::new();
        {
            let mut state = WorkforceState::load(&storage).unwrap();
            let id = state
                .add_department(CreateDepartment {
                    name: "Engineering".to_string(),
                })
                .unwrap()
                .id
                .clone();
            state.add_member(&id, "alice").unwrap();
        }

        let reloaded = WorkforceState::load(&storage).unwrap();
        assert_eq!(reloaded.departments().len(), 1);
        assert!(reloaded.departments()[0].has_member("alice"));
    }
}
