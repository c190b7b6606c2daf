//! Service behavior over in-memory ports: storage failures and emitted spans.

mod common;

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use tracing_test::traced_test;
use uuid::Uuid;

use academic_records::domain::error::DomainError;
use academic_records::domain::repo::{GroupsRepository, StudentsRepository};
use academic_records::domain::service::{GroupService, StudentService};
use academic_records::error::ErrorKind;
use academic_records::model::{Group, NewGroup, NewStudent, Student, StudentInput};

// In-memory students store
#[derive(Default)]
struct MemoryStudents {
    rows: Mutex<Vec<Student>>,
}

#[async_trait]
impl StudentsRepository for MemoryStudents {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>> {
        Ok(self.rows.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Student>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<Student>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.identifier == identifier)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.email == email)
            .cloned())
    }

    async fn exists_by_id(&self, id: Uuid) -> Result<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|s| s.id == id))
    }

    async fn identifier_taken(&self, identifier: &str, exclude: Option<Uuid>) -> Result<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.identifier == identifier && Some(s.id) != exclude))
    }

    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> Result<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.email == email && Some(s.id) != exclude))
    }

    async fn insert(&self, new: NewStudent) -> Result<Student> {
        let student = new.with_id(Uuid::new_v4());
        self.rows.lock().unwrap().push(student.clone());
        Ok(student)
    }

    async fn update(&self, student: Student) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|s| s.id == student.id) {
            Some(slot) => {
                *slot = student;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        Ok(rows.len() < before)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

// Every call fails the way a dropped connection would
struct UnreachableGroups;

fn unreachable<T>(op: &str) -> Result<T> {
    Err(anyhow!("connection refused")).with_context(|| format!("{op} failed"))
}

#[async_trait]
impl GroupsRepository for UnreachableGroups {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Group>> {
        unreachable("find_by_id")
    }

    async fn find_all(&self) -> Result<Vec<Group>> {
        unreachable("find_all")
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<Group>> {
        unreachable("find_by_name")
    }

    async fn exists_by_id(&self, _id: Uuid) -> Result<bool> {
        unreachable("exists_by_id")
    }

    async fn name_taken(&self, _name: &str, _exclude: Option<Uuid>) -> Result<bool> {
        unreachable("name_taken")
    }

    async fn insert(&self, _new: NewGroup) -> Result<Group> {
        unreachable("insert")
    }

    async fn update(&self, _group: Group) -> Result<bool> {
        unreachable("update")
    }

    async fn delete(&self, _id: Uuid) -> Result<bool> {
        unreachable("delete")
    }

    async fn count(&self) -> Result<u64> {
        unreachable("count")
    }
}

fn student_input() -> StudentInput {
    StudentInput {
        full_name: "Juan Pérez".to_owned(),
        identifier: "123456789".to_owned(),
        email: "juan@example.com".to_owned(),
        birth_date: chrono::NaiveDate::from_ymd_opt(1995, 3, 15),
        status: "activo".to_owned(),
    }
}

#[traced_test]
#[tokio::test]
async fn create_student_emits_spans() {
    let service = StudentService::new(Arc::new(MemoryStudents::default()));

    let created = service.create(student_input()).await;

    assert!(created.is_ok());
    assert!(logs_contain("academic_records.students.create"));
    assert!(logs_contain("Student created"));
}

#[traced_test]
#[tokio::test]
async fn count_runs_inside_its_own_span() {
    let service = StudentService::new(Arc::new(MemoryStudents::default()));
    service.create(student_input()).await.unwrap();

    assert_eq!(service.count().await.unwrap(), 1);
    assert!(logs_contain("academic_records.students.count"));
    assert!(logs_contain("Counted 1 students"));
}

#[traced_test]
#[tokio::test]
async fn association_lookup_is_traced() {
    let records = common::records().await.unwrap();

    let found = records
        .group_courses
        .exists_association(None, Some(Uuid::new_v4()))
        .await
        .unwrap();

    assert!(!found);
    assert!(logs_contain("academic_records.group_courses.exists_association"));
    assert!(logs_contain("Association lookup with a missing id"));
}

#[traced_test]
#[tokio::test]
async fn rejected_input_never_reaches_storage() {
    let repo = Arc::new(MemoryStudents::default());
    let service = StudentService::new(repo.clone());

    let mut input = student_input();
    input.email = "juan@".to_owned();
    let err = service.create(input).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(repo.rows.lock().unwrap().is_empty());
    assert!(!logs_contain("Student created"));
}

#[tokio::test]
async fn list_and_update_against_memory_store() {
    let service = StudentService::new(Arc::new(MemoryStudents::default()));
    let created = service.create(student_input()).await.unwrap();

    let mut input = StudentInput::from(&created);
    input.full_name = "Juan Carlos Pérez".to_owned();
    assert!(service.update(created.id, input).await.unwrap());

    let all = service.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].full_name, "Juan Carlos Pérez");
}

#[tokio::test]
async fn storage_failures_become_database_errors() {
    let service = GroupService::new(Arc::new(UnreachableGroups));

    let err = service.list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Storage);
    assert_eq!(
        err,
        DomainError::Database {
            message: "find_all failed: connection refused".to_owned(),
        }
    );

    let err = service.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(err.to_string().contains("exists_by_id failed"));
}

#[tokio::test]
async fn validation_runs_before_storage_is_touched() {
    let service = GroupService::new(Arc::new(UnreachableGroups));

    let err = service
        .create(academic_records::model::GroupInput {
            name: "G".to_owned(),
            description: "Evening cohort".to_owned(),
            status: "active".to_owned(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = service.find_by_name("  ").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}
