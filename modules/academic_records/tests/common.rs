#![allow(dead_code)]

use academic_records::model::{CourseInput, GroupInput, ProfessorInput, StudentInput};
use academic_records::AcademicRecords;
use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{ConnectOptions, Database};

/// Fresh in-memory SQLite database with the schema in place.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn records() -> Result<AcademicRecords> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(opts).await?;
    AcademicRecords::bootstrap(conn).await
}

pub fn student(identifier: &str, email: &str) -> StudentInput {
    StudentInput {
        full_name: "Ana Ramírez".to_owned(),
        identifier: identifier.to_owned(),
        email: email.to_owned(),
        birth_date: NaiveDate::from_ymd_opt(1997, 1, 30),
        status: "active".to_owned(),
    }
}

pub fn professor(identifier: &str, email: &str) -> ProfessorInput {
    ProfessorInput {
        full_name: "Laura Jiménez".to_owned(),
        identifier: identifier.to_owned(),
        email: email.to_owned(),
        department: "Computer Science".to_owned(),
        status: "active".to_owned(),
    }
}

pub fn course(code: &str, name: &str, credits: i32) -> CourseInput {
    CourseInput {
        code: code.to_owned(),
        name: name.to_owned(),
        description: "Introductory programming".to_owned(),
        credits,
    }
}

pub fn group(name: &str) -> GroupInput {
    GroupInput {
        name: name.to_owned(),
        description: "Evening cohort".to_owned(),
        status: "active".to_owned(),
    }
}
