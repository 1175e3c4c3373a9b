//! Department records and DTOs for create and update operations.

use serde::{Deserialize, Serialize};

/// A unit of work staff can report time against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
}

/// Grouping of tasks and staff members with one optional manager.
///
/// `manager`, when set, is always one of `members`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub manager: Option<String>,
}

impl Department {
    /// Whether `user` is listed as a member.
    pub fn has_member(&self, user: &str) -> bool {
        self.members.iter().any(|m| m == user)
    }

    /// Whether `user` is this department's manager.
    pub fn is_manager(&self, user: &str) -> bool {
        self.manager.as_deref() == Some(user)
    }

    /// Get task by ID.
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Resolve a task by ID, falling back to a case-insensitive name match.
    pub fn find_task(&self, id_or_name: &str) -> Option<&Task> {
        let needle = id_or_name.trim();
        self.task(needle)
            .or_else(|| self.tasks.iter().find(|t| t.name.eq_ignore_ascii_case(needle)))
    }
}

/// DTO for creating a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartment {
    pub name: String,
}

/// DTO for updating a department.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDepartment {
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engineering() -> Department {
        Department {
            id: "d1".to_string(),
            name: "Engineering".to_string(),
            tasks: vec![
                Task {
                    id: "t1".to_string(),
                    name: "Code Review".to_string(),
                },
                Task {
                    id: "t2".to_string(),
                    name: "Testing".to_string(),
                },
            ],
            members: vec!["alice".to_string(), "bob".to_string()],
            manager: Some("alice".to_string()),
        }
    }

    #[test]
    fn test_find_task_by_id_or_name() {
        let dept = engineering();
        assert_eq!(dept.find_task("t2").map(|t| t.name.as_str()), Some("Testing"));
        assert_eq!(dept.find_task("code review").map(|t| t.id.as_str()), Some("t1"));
        assert!(dept.find_task("Deploy").is_none());
    }

    #[test]
    fn test_membership_and_manager() {
        let dept = engineering();
        assert!(dept.has_member("bob"));
        assert!(!dept.has_member("carol"));
        assert!(dept.is_manager("alice"));
        assert!(!dept.is_manager("bob"));
    }

    #[test]
    fn test_missing_nested_fields_default() {
        let dept: Department = serde_json::from_str(r#"{"id":"d9","name":"Ops"}"#).unwrap();
        assert!(dept.tasks.is_empty());
        assert!(dept.members.is_empty());
        assert!(dept.manager.is_none());
    }
}
