use std::io::Write;

use academic_records::model::{Course, CourseInput};
use anyhow::Result;
use tokio::io::AsyncBufRead;

use super::Console;

const MENU: &str = "\
--- Courses ---
1. Create
2. List
3. Search by name
4. List by credits
5. Update
6. Delete
0. Back";

fn show(c: &Course) -> String {
    format!(
        "{} | {} | {} | {} | {} credits",
        c.id, c.code, c.name, c.description, c.credits
    )
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub(super) async fn courses_menu(&mut self) -> Result<()> {
        loop {
            self.prompt.say(MENU)?;
            let res = match self.prompt.line("Select an option: ").await?.trim() {
                "1" => self.create_course().await,
                "2" => self.list_courses().await,
                "3" => self.search_courses().await,
                "4" => self.courses_by_credits().await,
                "5" => self.update_course().await,
                "6" => self.delete_course().await,
                "0" => return Ok(()),
                other => self.prompt.say(format!("Unknown option '{other}'")),
            };
            self.report(res)?;
        }
    }

    async fn read_course(&mut self, current: Option<&Course>) -> Result<CourseInput> {
        let code = self.ask_text("Code", current.map(|c| c.code.as_str())).await?;
        let name = self.ask_text("Name", current.map(|c| c.name.as_str())).await?;
        let description = self
            .ask_text("Description", current.map(|c| c.description.as_str()))
            .await?;
        let credits = self
            .ask_number("credits", current.map(|c| c.credits))
            .await?;

        Ok(CourseInput {
            code,
            name,
            description,
            credits,
        })
    }

    fn print_courses(&mut self, courses: &[Course]) -> Result<()> {
        if courses.is_empty() {
            return self.prompt.say("No courses found");
        }
        for c in courses {
            self.prompt.say(show(c))?;
        }
        Ok(())
    }

    async fn create_course(&mut self) -> Result<()> {
        let input = self.read_course(None).await?;
        let course = self.records.courses.create(input).await?;
        self.prompt.say(format!("Course created: {}", show(&course)))
    }

    async fn list_courses(&mut self) -> Result<()> {
        let courses = self.records.courses.list().await?;
        self.print_courses(&courses)
    }

    async fn search_courses(&mut self) -> Result<()> {
        let fragment = self.prompt.line("Name contains: ").await?;
        let courses = self.records.courses.search_by_name(&fragment).await?;
        self.print_courses(&courses)
    }

    async fn courses_by_credits(&mut self) -> Result<()> {
        let credits = self.ask_number("credits", None).await?;
        let courses = self.records.courses.list_by_credits(credits).await?;
        self.print_courses(&courses)
    }

    async fn update_course(&mut self) -> Result<()> {
        let id = self.require_id("Course id").await?;
        let Some(current) = self.records.courses.get(id).await? else {
            return self.prompt.say("Course not found");
        };
        let input = self.read_course(Some(&current)).await?;
        if self.records.courses.update(id, input).await? {
            self.prompt.say("Course updated")
        } else {
            self.prompt.say("Course not found")
        }
    }

    async fn delete_course(&mut self) -> Result<()> {
        let id = self.require_id("Course id").await?;
        self.records.courses.delete(id).await?;
        self.prompt.say("Course deleted")
    }
}
