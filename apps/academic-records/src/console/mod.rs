//! Interactive text menus over the academic-records services.

mod courses;
mod groups;
mod links;
mod professors;
mod prompt;
mod students;

use std::io::Write;

use academic_records::domain::error::DomainError;
use academic_records::domain::validation::parse_date;
use academic_records::AcademicRecords;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tokio::io::AsyncBufRead;
use uuid::Uuid;

use prompt::{is_end_of_input, Prompt};

const MAIN_MENU: &str = "\
=== Academic Records ===
1. Students
2. Professors
3. Groups
4. Courses
5. Group-course links
6. Check database connection
0. Exit";

pub struct Console<R, W> {
    prompt: Prompt<R, W>,
    records: AcademicRecords,
    conn: DatabaseConnection,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(input: R, out: W, records: AcademicRecords, conn: DatabaseConnection) -> Self {
        Self {
            prompt: Prompt::new(input, out),
            records,
            conn,
        }
    }

    /// Main loop. Returns when the user picks 0 or input ends.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.prompt.say(MAIN_MENU)?;
            let choice = match self.prompt.line("Select an option: ").await {
                Ok(choice) => choice,
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => return Err(e),
            };

            let res = match choice.trim() {
                "1" => self.students_menu().await,
                "2" => self.professors_menu().await,
                "3" => self.groups_menu().await,
                "4" => self.courses_menu().await,
                "5" => self.links_menu().await,
                "6" => self.check_connection().await,
                "0" => break,
                other => self.prompt.say(format!("Unknown option '{other}'")),
            };
            match res {
                Err(e) if is_end_of_input(&e) => break,
                other => self.report(other)?,
            }
        }
        self.prompt.say("Goodbye")?;
        Ok(())
    }

    /// Print a failed action and carry on; end of input still propagates.
    fn report(&mut self, res: Result<()>) -> Result<()> {
        match res {
            Ok(()) => Ok(()),
            Err(e) if is_end_of_input(&e) => Err(e),
            Err(e) => self.prompt.say(format!("error: {e:#}")),
        }
    }

    async fn check_connection(&mut self) -> Result<()> {
        self.conn.ping().await.context("database ping failed")?;
        self.prompt.say("Database connection OK")?;
        let totals = counts(&self.records).await?;
        self.prompt.say(totals)
    }

    async fn ask_id(&mut self, label: &str) -> Result<Option<Uuid>> {
        let raw = self.prompt.line(&format!("{label}: ")).await?;
        Ok(parse_id(&raw))
    }

    /// Like [`Console::ask_id`] for operations where a missing id is an error.
    async fn require_id(&mut self, label: &str) -> Result<Uuid> {
        self.ask_id(label)
            .await?
            .ok_or_else(|| DomainError::validation("id", "a valid id is required").into())
    }

    async fn ask_date(&mut self, label: &str, current: Option<NaiveDate>) -> Result<NaiveDate> {
        let raw = match current {
            Some(d) => {
                let shown = d.format("%d/%m/%Y").to_string();
                self.prompt.line_or(label, &shown).await?
            }
            None => self.prompt.line(&format!("{label} (dd/MM/yyyy): ")).await?,
        };
        Ok(parse_date(&raw)?)
    }

    async fn ask_number(&mut self, label: &str, current: Option<i32>) -> Result<i32> {
        let raw = match current {
            Some(n) => self.prompt.line_or(label, &n.to_string()).await?,
            None => self.prompt.line(&format!("{label}: ")).await?,
        };
        raw.trim()
            .parse()
            .map_err(|_| DomainError::validation(label, "expected a whole number").into())
    }

    async fn ask_text(&mut self, label: &str, current: Option<&str>) -> Result<String> {
        match current {
            Some(c) => self.prompt.line_or(label, c).await,
            None => self.prompt.line(&format!("{label}: ")).await,
        }
    }
}

/// Unparseable input counts as a missing id.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// One-line totals shared by the menu and the `check` command.
pub async fn counts(records: &AcademicRecords) -> Result<String> {
    Ok(format!(
        "students: {}, professors: {}, courses: {}, groups: {}, links: {}",
        records.students.count().await?,
        records.professors.count().await?,
        records.courses.count().await?,
        records.groups.count().await?,
        records.group_courses.count().await?,
    ))
}
