use std::io::Write;

use academic_records::model::{Group, GroupInput};
use anyhow::Result;
use tokio::io::AsyncBufRead;

use super::Console;

const MENU: &str = "\
--- Groups ---
1. Create
2. List
3. Find by name
4. Update
5. Delete
0. Back";

fn show(g: &Group) -> String {
    format!("{} | {} | {} | {}", g.id, g.name, g.description, g.status)
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub(super) async fn groups_menu(&mut self) -> Result<()> {
        loop {
            self.prompt.say(MENU)?;
            let res = match self.prompt.line("Select an option: ").await?.trim() {
                "1" => self.create_group().await,
                "2" => self.list_groups().await,
                "3" => self.group_by_name().await,
                "4" => self.update_group().await,
                "5" => self.delete_group().await,
                "0" => return Ok(()),
                other => self.prompt.say(format!("Unknown option '{other}'")),
            };
            self.report(res)?;
        }
    }

    async fn read_group(&mut self, current: Option<&Group>) -> Result<GroupInput> {
        let name = self.ask_text("Name", current.map(|g| g.name.as_str())).await?;
        let description = self
            .ask_text("Description", current.map(|g| g.description.as_str()))
            .await?;
        let status = self
            .prompt
            .line_or(
                "Status (active/inactive)",
                current.map_or("active", |g| g.status.as_str()),
            )
            .await?;

        Ok(GroupInput {
            name,
            description,
            status,
        })
    }

    async fn create_group(&mut self) -> Result<()> {
        let input = self.read_group(None).await?;
        let group = self.records.groups.create(input).await?;
        self.prompt.say(format!("Group created: {}", show(&group)))
    }

    async fn list_groups(&mut self) -> Result<()> {
        let groups = self.records.groups.list().await?;
        if groups.is_empty() {
            return self.prompt.say("No groups registered");
        }
        for g in &groups {
            self.prompt.say(show(g))?;
        }
        Ok(())
    }

    async fn group_by_name(&mut self) -> Result<()> {
        let name = self.prompt.line("Name: ").await?;
        match self.records.groups.find_by_name(&name).await? {
            Some(g) => self.prompt.say(show(&g)),
            None => self.prompt.say("No group with that name"),
        }
    }

    async fn update_group(&mut self) -> Result<()> {
        let id = self.require_id("Group id").await?;
        let Some(current) = self.records.groups.get(id).await? else {
            return self.prompt.say("Group not found");
        };
        let input = self.read_group(Some(&current)).await?;
        if self.records.groups.update(id, input).await? {
            self.prompt.say("Group updated")
        } else {
            self.prompt.say("Group not found")
        }
    }

    async fn delete_group(&mut self) -> Result<()> {
        let id = self.require_id("Group id").await?;
        self.records.groups.delete(id).await?;
        self.prompt.say("Group deleted")
    }
}
