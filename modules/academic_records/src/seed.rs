//! Fixed demo data for a fresh database.

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::contract::model::{CourseInput, GroupInput, ProfessorInput, StudentInput};
use crate::contract::ErrorKind;
use crate::domain::error::DomainError;
use crate::module::AcademicRecords;

/// Created/skipped counts per entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub students_created: usize,
    pub professors_created: usize,
    pub courses_created: usize,
    pub groups_created: usize,
    pub skipped: usize,
}

impl SeedReport {
    pub fn created(&self) -> usize {
        self.students_created + self.professors_created + self.courses_created + self.groups_created
    }
}

/// Outcome of one insert: `true` when created, `false` when it already existed.
fn tally<T>(
    res: Result<T, DomainError>,
    label: &str,
    report: &mut SeedReport,
) -> Result<bool, DomainError> {
    match res {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::Conflict => {
            warn!(record = %label, error = %e, "Seed record skipped");
            report.skipped += 1;
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn students() -> Vec<StudentInput> {
    [
        ("Juan Carlos Pérez", "123456789", "juan.perez", date(1995, 3, 15), "activo"),
        ("María Elena González", "234567890", "maria.gonzalez", date(1996, 7, 22), "activo"),
        ("Roberto Antonio Silva", "345678901", "roberto.silva", date(1994, 11, 8), "activo"),
        ("Ana Patricia Ramírez", "456789012", "ana.ramirez", date(1997, 1, 30), "activo"),
        ("Carlos Eduardo Morales", "567890123", "carlos.morales", date(1995, 9, 14), "inactivo"),
    ]
    .into_iter()
    .map(|(name, id, user, birth, status)| StudentInput {
        full_name: name.to_owned(),
        identifier: id.to_owned(),
        email: format!("{user}@estudiante.ucenfotec.ac.cr"),
        birth_date: birth,
        status: status.to_owned(),
    })
    .collect()
}

fn professors() -> Vec<ProfessorInput> {
    [
        ("Dr. Roberto Fernández", "100234567", "roberto.fernandez", "Ingeniería de Software", "activo"),
        ("MSc. Laura Jiménez", "200345678", "laura.jimenez", "Ciencias de la Computación", "activo"),
        ("Ing. Miguel Ángel Castro", "300456789", "miguel.castro", "Desarrollo Web", "activo"),
        ("Dra. Carmen Solís", "400567890", "carmen.solis", "Base de Datos", "activo"),
        ("Lic. Fernando Mora", "500678901", "fernando.mora", "Programación", "inactivo"),
    ]
    .into_iter()
    .map(|(name, id, user, department, status)| ProfessorInput {
        full_name: name.to_owned(),
        identifier: id.to_owned(),
        email: format!("{user}@ucenfotec.ac.cr"),
        department: department.to_owned(),
        status: status.to_owned(),
    })
    .collect()
}

fn courses() -> Vec<CourseInput> {
    [
        ("PRG101", "Programación I", "Introducción a la programación", 3),
        ("PRG102", "Programación II", "Programación orientada a objetos", 4),
        ("BDD101", "Base de Datos I", "Fundamentos de bases de datos", 3),
        ("WEB101", "Desarrollo Web", "Desarrollo de aplicaciones web", 4),
        ("ING201", "Ingeniería de Software", "Metodologías de desarrollo", 3),
    ]
    .into_iter()
    .map(|(code, name, description, credits)| CourseInput {
        code: code.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        credits,
    })
    .collect()
}

fn groups() -> Vec<GroupInput> {
    [
        ("Grupo 1 Programación I", "PRG101"),
        ("Grupo 1 Programación II", "PRG102"),
        ("Grupo 1 Base de Datos I", "BDD101"),
        ("Grupo 1 Desarrollo Web", "WEB101"),
        ("Grupo 1 Ingeniería de Software", "ING201"),
    ]
    .into_iter()
    .map(|(name, code)| GroupInput {
        name: name.to_owned(),
        description: format!("Grupo para el curso {code}"),
        status: "activo".to_owned(),
    })
    .collect()
}

/// Insert the demo records through the services. Records that already exist
/// are skipped; any other error aborts.
#[instrument(name = "academic_records.seed", skip(records))]
pub async fn seed_demo_data(records: &AcademicRecords) -> Result<SeedReport, DomainError> {
    let mut report = SeedReport::default();

    for input in students() {
        let label = input.full_name.clone();
        if tally(records.students.create(input).await, &label, &mut report)? {
            report.students_created += 1;
        }
    }
    for input in professors() {
        let label = input.full_name.clone();
        if tally(records.professors.create(input).await, &label, &mut report)? {
            report.professors_created += 1;
        }
    }
    for input in courses() {
        let label = input.code.clone();
        if tally(records.courses.create(input).await, &label, &mut report)? {
            report.courses_created += 1;
        }
    }
    for input in groups() {
        let label = input.name.clone();
        if tally(records.groups.create(input).await, &label, &mut report)? {
            report.groups_created += 1;
        }
    }

    info!(
        created = report.created(),
        skipped = report.skipped,
        "Demo data seeded"
    );
    Ok(report)
}
