use std::io::Write;

use academic_records::model::{Professor, ProfessorInput};
use anyhow::Result;
use tokio::io::AsyncBufRead;

use super::Console;

const MENU: &str = "\
--- Professors ---
1. Create
2. List
3. Find by identifier
4. Find by email
5. List by department
6. Update
7. Delete
0. Back";

fn show(p: &Professor) -> String {
    format!(
        "{} | {} | {} | {} | {} | {}",
        p.id, p.full_name, p.identifier, p.email, p.department, p.status
    )
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub(super) async fn professors_menu(&mut self) -> Result<()> {
        loop {
            self.prompt.say(MENU)?;
            let res = match self.prompt.line("Select an option: ").await?.trim() {
                "1" => self.create_professor().await,
                "2" => self.list_professors().await,
                "3" => self.professor_by_identifier().await,
                "4" => self.professor_by_email().await,
                "5" => self.professors_by_department().await,
                "6" => self.update_professor().await,
                "7" => self.delete_professor().await,
                "0" => return Ok(()),
                other => self.prompt.say(format!("Unknown option '{other}'")),
            };
            self.report(res)?;
        }
    }

    async fn read_professor(&mut self, current: Option<&Professor>) -> Result<ProfessorInput> {
        let defaults = current.map(ProfessorInput::from);
        let d = defaults.as_ref();

        let full_name = self.ask_text("Full name", d.map(|p| p.full_name.as_str())).await?;
        let identifier = self
            .ask_text("Identifier", d.map(|p| p.identifier.as_str()))
            .await?;
        let email = self.ask_text("Email", d.map(|p| p.email.as_str())).await?;
        let department = self
            .ask_text("Department", d.map(|p| p.department.as_str()))
            .await?;
        let status = self
            .prompt
            .line_or(
                "Status (active/inactive)",
                d.map_or("active", |p| p.status.as_str()),
            )
            .await?;

        Ok(ProfessorInput {
            full_name,
            identifier,
            email,
            department,
            status,
        })
    }

    async fn create_professor(&mut self) -> Result<()> {
        let input = self.read_professor(None).await?;
        let professor = self.records.professors.create(input).await?;
        self.prompt.say(format!("Professor created: {}", show(&professor)))
    }

    async fn list_professors(&mut self) -> Result<()> {
        let professors = self.records.professors.list().await?;
        self.print_professors(&professors)
    }

    fn print_professors(&mut self, professors: &[Professor]) -> Result<()> {
        if professors.is_empty() {
            return self.prompt.say("No professors found");
        }
        for p in professors {
            self.prompt.say(show(p))?;
        }
        Ok(())
    }

    async fn professor_by_identifier(&mut self) -> Result<()> {
        let identifier = self.prompt.line("Identifier: ").await?;
        match self
            .records
            .professors
            .find_by_identifier(&identifier)
            .await?
        {
            Some(p) => self.prompt.say(show(&p)),
            None => self.prompt.say("No professor with that identifier"),
        }
    }

    async fn professor_by_email(&mut self) -> Result<()> {
        let email = self.prompt.line("Email: ").await?;
        match self.records.professors.find_by_email(&email).await? {
            Some(p) => self.prompt.say(show(&p)),
            None => self.prompt.say("No professor with that email"),
        }
    }

    async fn professors_by_department(&mut self) -> Result<()> {
        let department = self.prompt.line("Department: ").await?;
        let professors = self
            .records
            .professors
            .list_by_department(&department)
            .await?;
        self.print_professors(&professors)
    }

    async fn update_professor(&mut self) -> Result<()> {
        let id = self.require_id("Professor id").await?;
        let Some(current) = self.records.professors.get(id).await? else {
            return self.prompt.say("Professor not found");
        };
        let input = self.read_professor(Some(&current)).await?;
        if self.records.professors.update(id, input).await? {
            self.prompt.say("Professor updated")
        } else {
            self.prompt.say("Professor not found")
        }
    }

    async fn delete_professor(&mut self) -> Result<()> {
        let id = self.require_id("Professor id").await?;
        self.records.professors.delete(id).await?;
        self.prompt.say("Professor deleted")
    }
}
