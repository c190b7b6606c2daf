mod courses;
mod group_courses;
mod groups;
mod professors;
mod students;

pub use courses::CourseService;
pub use group_courses::GroupCourseService;
pub use groups::GroupService;
pub use professors::ProfessorService;
pub use students::StudentService;

use crate::contract::model::Status;
use crate::domain::error::DomainError;
use crate::domain::validation as v;

/// Validate a raw status word and map it onto [`Status`].
fn validated_status(raw: &str) -> Result<Status, DomainError> {
    if !v::is_valid_state(raw) {
        return Err(DomainError::validation(
            "status",
            "status must be 'active' or 'inactive'",
        ));
    }
    v::normalize_state(Some(raw))
        .parse()
        .map_err(|e| DomainError::validation("status", format!("{e}")))
}
