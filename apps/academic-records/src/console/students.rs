use std::io::Write;

use academic_records::model::{Student, StudentInput};
use anyhow::Result;
use tokio::io::AsyncBufRead;

use super::Console;

const MENU: &str = "\
--- Students ---
1. Create
2. List
3. Find by identifier
4. Find by email
5. Update
6. Delete
0. Back";

fn show(s: &Student) -> String {
    format!(
        "{} | {} | {} | {} | {} | {}",
        s.id,
        s.full_name,
        s.identifier,
        s.email,
        s.birth_date.format("%d/%m/%Y"),
        s.status
    )
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub(super) async fn students_menu(&mut self) -> Result<()> {
        loop {
            self.prompt.say(MENU)?;
            let res = match self.prompt.line("Select an option: ").await?.trim() {
                "1" => self.create_student().await,
                "2" => self.list_students().await,
                "3" => self.student_by_identifier().await,
                "4" => self.student_by_email().await,
                "5" => self.update_student().await,
                "6" => self.delete_student().await,
                "0" => return Ok(()),
                other => self.prompt.say(format!("Unknown option '{other}'")),
            };
            self.report(res)?;
        }
    }

    async fn read_student(&mut self, current: Option<&Student>) -> Result<StudentInput> {
        let defaults = current.map(StudentInput::from);
        let d = defaults.as_ref();

        let full_name = self.ask_text("Full name", d.map(|s| s.full_name.as_str())).await?;
        let identifier = self
            .ask_text("Identifier", d.map(|s| s.identifier.as_str()))
            .await?;
        let email = self.ask_text("Email", d.map(|s| s.email.as_str())).await?;
        let birth_date = self
            .ask_date("Birth date", current.map(|s| s.birth_date))
            .await?;
        let status = self
            .prompt
            .line_or(
                "Status (active/inactive)",
                d.map_or("active", |s| s.status.as_str()),
            )
            .await?;

        Ok(StudentInput {
            full_name,
            identifier,
            email,
            birth_date: Some(birth_date),
            status,
        })
    }

    async fn create_student(&mut self) -> Result<()> {
        let input = self.read_student(None).await?;
        let student = self.records.students.create(input).await?;
        self.prompt.say(format!("Student created: {}", show(&student)))
    }

    async fn list_students(&mut self) -> Result<()> {
        let students = self.records.students.list().await?;
        if students.is_empty() {
            return self.prompt.say("No students registered");
        }
        for s in &students {
            self.prompt.say(show(s))?;
        }
        Ok(())
    }

    async fn student_by_identifier(&mut self) -> Result<()> {
        let identifier = self.prompt.line("Identifier: ").await?;
        match self.records.students.find_by_identifier(&identifier).await? {
            Some(s) => self.prompt.say(show(&s)),
            None => self.prompt.say("No student with that identifier"),
        }
    }

    async fn student_by_email(&mut self) -> Result<()> {
        let email = self.prompt.line("Email: ").await?;
        match self.records.students.find_by_email(&email).await? {
            Some(s) => self.prompt.say(show(&s)),
            None => self.prompt.say("No student with that email"),
        }
    }

    async fn update_student(&mut self) -> Result<()> {
        let id = self.require_id("Student id").await?;
        let Some(current) = self.records.students.get(id).await? else {
            return self.prompt.say("Student not found");
        };
        let input = self.read_student(Some(&current)).await?;
        if self.records.students.update(id, input).await? {
            self.prompt.say("Student updated")
        } else {
            self.prompt.say("Student not found")
        }
    }

    async fn delete_student(&mut self) -> Result<()> {
        let id = self.require_id("Student id").await?;
        self.records.students.delete(id).await?;
        self.prompt.say("Student deleted")
    }
}
