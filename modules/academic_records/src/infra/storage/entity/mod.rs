pub mod courses;
pub mod group_courses;
pub mod groups;
pub mod professors;
pub mod students;
