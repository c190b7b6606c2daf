use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use uuid::Uuid;

/// Two-valued activity flag carried by students, professors and groups.
///
/// Stored as `"active"` / `"inactive"`; parsing also accepts the legacy
/// Spanish terms `"activo"` / `"inactivo"`. Any value may be set at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" | "activo" => Ok(Self::Active),
            "inactive" | "inactivo" => Ok(Self::Inactive),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

// --- students ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: Uuid,
    pub full_name: String,
    pub identifier: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub status: Status,
}

/// Raw student fields as entered at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudentInput {
    pub full_name: String,
    pub identifier: String,
    pub email: String,
    pub birth_date: Option<NaiveDate>,
    pub status: String,
}

/// Validated, normalized student ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub full_name: String,
    pub identifier: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub status: Status,
}

impl NewStudent {
    pub fn with_id(self, id: Uuid) -> Student {
        Student {
            id,
            full_name: self.full_name,
            identifier: self.identifier,
            email: self.email,
            birth_date: self.birth_date,
            status: self.status,
        }
    }
}

impl From<&Student> for StudentInput {
    fn from(s: &Student) -> Self {
        Self {
            full_name: s.full_name.clone(),
            identifier: s.identifier.clone(),
            email: s.email.clone(),
            birth_date: Some(s.birth_date),
            status: s.status.to_string(),
        }
    }
}

// --- professors ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    pub id: Uuid,
    pub full_name: String,
    pub identifier: String,
    pub email: String,
    pub department: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfessorInput {
    pub full_name: String,
    pub identifier: String,
    pub email: String,
    pub department: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProfessor {
    pub full_name: String,
    pub identifier: String,
    pub email: String,
    pub department: String,
    pub status: Status,
}

impl NewProfessor {
    pub fn with_id(self, id: Uuid) -> Professor {
        Professor {
            id,
            full_name: self.full_name,
            identifier: self.identifier,
            email: self.email,
            department: self.department,
            status: self.status,
        }
    }
}

impl From<&Professor> for ProfessorInput {
    fn from(p: &Professor) -> Self {
        Self {
            full_name: p.full_name.clone(),
            identifier: p.identifier.clone(),
            email: p.email.clone(),
            department: p.department.clone(),
            status: p.status.to_string(),
        }
    }
}

// --- courses ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: String,
    pub credits: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseInput {
    pub code: String,
    pub name: String,
    pub description: String,
    pub credits: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub code: String,
    pub name: String,
    pub description: String,
    pub credits: i32,
}

impl NewCourse {
    pub fn with_id(self, id: Uuid) -> Course {
        Course {
            id,
            code: self.code,
            name: self.name,
            description: self.description,
            credits: self.credits,
        }
    }
}

impl From<&Course> for CourseInput {
    fn from(c: &Course) -> Self {
        Self {
            code: c.code.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
            credits: c.credits,
        }
    }
}

// --- groups ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupInput {
    pub name: String,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGroup {
    pub name: String,
    pub description: String,
    pub status: Status,
}

impl NewGroup {
    pub fn with_id(self, id: Uuid) -> Group {
        Group {
            id,
            name: self.name,
            description: self.description,
            status: self.status,
        }
    }
}

impl From<&Group> for GroupInput {
    fn from(g: &Group) -> Self {
        Self {
            name: g.name.clone(),
            description: g.description.clone(),
            status: g.status.to_string(),
        }
    }
}

// --- group/course associations ---

/// Many-to-many link between a group and a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupCourse {
    pub id: Uuid,
    pub group_id: Uuid,
    pub course_id: Uuid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewGroupCourse {
    pub group_id: Uuid,
    pub course_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_both_vocabularies() {
        assert_eq!("active".parse::<Status>(), Ok(Status::Active));
        assert_eq!("  ACTIVO ".parse::<Status>(), Ok(Status::Active));
        assert_eq!("Inactive".parse::<Status>(), Ok(Status::Inactive));
        assert_eq!("inactivo".parse::<Status>(), Ok(Status::Inactive));
        assert!("paused".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn status_displays_canonical_form() {
        assert_eq!(Status::Active.to_string(), "active");
        assert_eq!(Status::Inactive.as_str(), "inactive");
        assert_eq!(Status::default(), Status::Active);
    }

    #[test]
    fn unknown_status_is_a_std_error() {
        let err = "paused".parse::<Status>().unwrap_err();
        assert_eq!(err.to_string(), "unknown status 'paused'");
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert!(boxed.source().is_none());
    }
}
