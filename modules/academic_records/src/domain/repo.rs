//! Ports for the domain layer: persistence operations the services need.
//! Object-safe and async-friendly via `async_trait`.
//!
//! Gateways assign ids on insert and return the populated record.
//! `exclude` parameters skip the record being updated in uniqueness checks.

use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::{
    Course, Group, GroupCourse, NewCourse, NewGroup, NewGroupCourse, NewProfessor, NewStudent,
    Professor, Student,
};

#[async_trait]
pub trait StudentsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Student>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Student>>;
    async fn find_by_identifier(&self, identifier: &str) -> anyhow::Result<Option<Student>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Student>>;
    async fn exists_by_id(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn identifier_taken(&self, identifier: &str, exclude: Option<Uuid>)
        -> anyhow::Result<bool>;
    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> anyhow::Result<bool>;
    async fn insert(&self, new: NewStudent) -> anyhow::Result<Student>;
    /// Replace the stored record; returns false if no record has `student.id`.
    async fn update(&self, student: Student) -> anyhow::Result<bool>;
    /// Returns true if a record was deleted.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn count(&self) -> anyhow::Result<u64>;
}

#[async_trait]
pub trait ProfessorsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Professor>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Professor>>;
    async fn find_by_identifier(&self, identifier: &str) -> anyhow::Result<Option<Professor>>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Professor>>;
    async fn find_by_department(&self, department: &str) -> anyhow::Result<Vec<Professor>>;
    async fn exists_by_id(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn identifier_taken(&self, identifier: &str, exclude: Option<Uuid>)
        -> anyhow::Result<bool>;
    async fn email_taken(&self, email: &str, exclude: Option<Uuid>) -> anyhow::Result<bool>;
    async fn insert(&self, new: NewProfessor) -> anyhow::Result<Professor>;
    async fn update(&self, professor: Professor) -> anyhow::Result<bool>;
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn count(&self) -> anyhow::Result<u64>;
}

#[async_trait]
pub trait CoursesRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Course>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Course>>;
    /// Case-insensitive substring match on the course name.
    async fn find_by_name_containing(&self, fragment: &str) -> anyhow::Result<Vec<Course>>;
    async fn find_by_credits(&self, credits: i32) -> anyhow::Result<Vec<Course>>;
    async fn exists_by_id(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn code_taken(&self, code: &str, exclude: Option<Uuid>) -> anyhow::Result<bool>;
    async fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> anyhow::Result<bool>;
    async fn insert(&self, new: NewCourse) -> anyhow::Result<Course>;
    async fn update(&self, course: Course) -> anyhow::Result<bool>;
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn count(&self) -> anyhow::Result<u64>;
}

#[async_trait]
pub trait GroupsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Group>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Group>>;
    async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Group>>;
    async fn exists_by_id(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn name_taken(&self, name: &str, exclude: Option<Uuid>) -> anyhow::Result<bool>;
    async fn insert(&self, new: NewGroup) -> anyhow::Result<Group>;
    async fn update(&self, group: Group) -> anyhow::Result<bool>;
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn count(&self) -> anyhow::Result<u64>;
}

#[async_trait]
pub trait GroupCoursesRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<GroupCourse>>;
    async fn find_all(&self) -> anyhow::Result<Vec<GroupCourse>>;
    async fn find_by_group(&self, group_id: Uuid) -> anyhow::Result<Vec<GroupCourse>>;
    async fn find_by_course(&self, course_id: Uuid) -> anyhow::Result<Vec<GroupCourse>>;
    async fn exists_by_id(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn pair_exists(&self, group_id: Uuid, course_id: Uuid) -> anyhow::Result<bool>;
    async fn insert(&self, new: NewGroupCourse) -> anyhow::Result<GroupCourse>;
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn count(&self) -> anyhow::Result<u64>;
}
