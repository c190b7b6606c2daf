use std::io::Write;

use academic_records::model::GroupCourse;
use anyhow::Result;
use tokio::io::AsyncBufRead;

use super::Console;

const MENU: &str = "\
--- Group-course links ---
1. Link a course to a group
2. List all
3. List by group
4. List by course
5. Check a link
6. Delete
0. Back";

fn show(l: &GroupCourse) -> String {
    format!("{} | group {} | course {}", l.id, l.group_id, l.course_id)
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub(super) async fn links_menu(&mut self) -> Result<()> {
        loop {
            self.prompt.say(MENU)?;
            let res = match self.prompt.line("Select an option: ").await?.trim() {
                "1" => self.create_link().await,
                "2" => self.list_links().await,
                "3" => self.links_by_group().await,
                "4" => self.links_by_course().await,
                "5" => self.check_link().await,
                "6" => self.delete_link().await,
                "0" => return Ok(()),
                other => self.prompt.say(format!("Unknown option '{other}'")),
            };
            self.report(res)?;
        }
    }

    fn print_links(&mut self, links: &[GroupCourse]) -> Result<()> {
        if links.is_empty() {
            return self.prompt.say("No links found");
        }
        for l in links {
            self.prompt.say(show(l))?;
        }
        Ok(())
    }

    async fn create_link(&mut self) -> Result<()> {
        let group_id = self.ask_id("Group id").await?;
        let course_id = self.ask_id("Course id").await?;
        let link = self.records.group_courses.create(group_id, course_id).await?;
        self.prompt.say(format!("Link created: {}", show(&link)))
    }

    async fn list_links(&mut self) -> Result<()> {
        let links = self.records.group_courses.list().await?;
        self.print_links(&links)
    }

    async fn links_by_group(&mut self) -> Result<()> {
        let group_id = self.require_id("Group id").await?;
        let links = self.records.group_courses.list_by_group(group_id).await?;
        self.print_links(&links)
    }

    async fn links_by_course(&mut self) -> Result<()> {
        let course_id = self.require_id("Course id").await?;
        let links = self.records.group_courses.list_by_course(course_id).await?;
        self.print_links(&links)
    }

    async fn check_link(&mut self) -> Result<()> {
        let group_id = self.ask_id("Group id").await?;
        let course_id = self.ask_id("Course id").await?;
        let linked = self
            .records
            .group_courses
            .exists_association(group_id, course_id)
            .await?;
        self.prompt.say(if linked { "Linked" } else { "Not linked" })
    }

    async fn delete_link(&mut self) -> Result<()> {
        let id = self.require_id("Link id").await?;
        self.records.group_courses.delete(id).await?;
        self.prompt.say("Link deleted")
    }
}
