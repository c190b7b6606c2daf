//! Row <-> contract conversions.

use anyhow::Context;
use sea_orm::{ActiveValue::NotSet, Set};

use crate::contract::model::{Course, Group, GroupCourse, Professor, Status, Student};
use crate::infra::storage::entity::{courses, group_courses, groups, professors, students};

fn parse_status(raw: &str) -> anyhow::Result<Status> {
    raw.parse::<Status>()
        .with_context(|| format!("corrupt status column: '{raw}'"))
}

impl TryFrom<students::Model> for Student {
    type Error = anyhow::Error;

    fn try_from(m: students::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            full_name: m.full_name,
            identifier: m.identifier,
            email: m.email,
            birth_date: m.birth_date,
            status: parse_status(&m.status)?,
        })
    }
}

/// Every column but the id, for `update_many().set(..)`.
pub fn student_changes(s: Student) -> students::ActiveModel {
    students::ActiveModel {
        id: NotSet,
        full_name: Set(s.full_name),
        identifier: Set(s.identifier),
        email: Set(s.email),
        birth_date: Set(s.birth_date),
        status: Set(s.status.as_str().to_owned()),
    }
}

impl TryFrom<professors::Model> for Professor {
    type Error = anyhow::Error;

    fn try_from(m: professors::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            full_name: m.full_name,
            identifier: m.identifier,
            email: m.email,
            department: m.department,
            status: parse_status(&m.status)?,
        })
    }
}

pub fn professor_changes(p: Professor) -> professors::ActiveModel {
    professors::ActiveModel {
        id: NotSet,
        full_name: Set(p.full_name),
        identifier: Set(p.identifier),
        email: Set(p.email),
        department: Set(p.department),
        status: Set(p.status.as_str().to_owned()),
    }
}

impl From<courses::Model> for Course {
    fn from(m: courses::Model) -> Self {
        Self {
            id: m.id,
            code: m.code,
            name: m.name,
            description: m.description,
            credits: m.credits,
        }
    }
}

pub fn course_changes(c: Course) -> courses::ActiveModel {
    courses::ActiveModel {
        id: NotSet,
        code: Set(c.code),
        name: Set(c.name),
        description: Set(c.description),
        credits: Set(c.credits),
    }
}

impl TryFrom<groups::Model> for Group {
    type Error = anyhow::Error;

    fn try_from(m: groups::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            name: m.name,
            description: m.description,
            status: parse_status(&m.status)?,
        })
    }
}

pub fn group_changes(g: Group) -> groups::ActiveModel {
    groups::ActiveModel {
        id: NotSet,
        name: Set(g.name),
        description: Set(g.description),
        status: Set(g.status.as_str().to_owned()),
    }
}

impl From<group_courses::Model> for GroupCourse {
    fn from(m: group_courses::Model) -> Self {
        Self {
            id: m.id,
            group_id: m.group_id,
            course_id: m.course_id,
        }
    }
}

/// Convert a batch of rows, failing on the first corrupt one.
pub fn try_collect<M, T>(rows: Vec<M>) -> anyhow::Result<Vec<T>>
where
    T: TryFrom<M, Error = anyhow::Error>,
{
    rows.into_iter().map(T::try_from).collect()
}
