//! SeaORM-backed implementations of the domain repository ports.
//!
//! Each repository is generic over `C: ConnectionTrait`, so it can hold a
//! `DatabaseConnection` or a transaction.

mod courses;
mod group_courses;
mod groups;
mod professors;
mod students;

pub use courses::SeaOrmCoursesRepository;
pub use group_courses::SeaOrmGroupCoursesRepository;
pub use groups::SeaOrmGroupsRepository;
pub use professors::SeaOrmProfessorsRepository;
pub use students::SeaOrmStudentsRepository;
