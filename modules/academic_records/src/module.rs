use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::domain::repo::{
    CoursesRepository, GroupCoursesRepository, GroupsRepository, ProfessorsRepository,
    StudentsRepository,
};
use crate::domain::service::{
    CourseService, GroupCourseService, GroupService, ProfessorService, StudentService,
};
use crate::infra::storage::repo::{
    SeaOrmCoursesRepository, SeaOrmGroupCoursesRepository, SeaOrmGroupsRepository,
    SeaOrmProfessorsRepository, SeaOrmStudentsRepository,
};

/// One service per entity, all sharing the caller's connection handle.
#[derive(Clone)]
pub struct AcademicRecords {
    pub students: StudentService,
    pub professors: ProfessorService,
    pub courses: CourseService,
    pub groups: GroupService,
    pub group_courses: GroupCourseService,
}

impl AcademicRecords {
    /// Wire SeaORM gateways to the domain services. Does not touch the schema.
    pub fn new(conn: DatabaseConnection) -> Self {
        let students: Arc<dyn StudentsRepository> =
            Arc::new(SeaOrmStudentsRepository::new(conn.clone()));
        let professors: Arc<dyn ProfessorsRepository> =
            Arc::new(SeaOrmProfessorsRepository::new(conn.clone()));
        let courses: Arc<dyn CoursesRepository> =
            Arc::new(SeaOrmCoursesRepository::new(conn.clone()));
        let groups: Arc<dyn GroupsRepository> = Arc::new(SeaOrmGroupsRepository::new(conn.clone()));
        let group_courses: Arc<dyn GroupCoursesRepository> =
            Arc::new(SeaOrmGroupCoursesRepository::new(conn));

        Self::from_repositories(students, professors, courses, groups, group_courses)
    }

    /// Build the context from arbitrary port implementations.
    pub fn from_repositories(
        students: Arc<dyn StudentsRepository>,
        professors: Arc<dyn ProfessorsRepository>,
        courses: Arc<dyn CoursesRepository>,
        groups: Arc<dyn GroupsRepository>,
        group_courses: Arc<dyn GroupCoursesRepository>,
    ) -> Self {
        Self {
            students: StudentService::new(students),
            professors: ProfessorService::new(professors),
            courses: CourseService::new(courses.clone()),
            groups: GroupService::new(groups.clone()),
            group_courses: GroupCourseService::new(group_courses, groups, courses),
        }
    }

    /// Ensure the tables exist, then wire the services.
    pub async fn bootstrap(conn: DatabaseConnection) -> anyhow::Result<Self> {
        crate::infra::storage::bootstrap_schema(&conn).await?;
        info!("Academic records module initialized");
        Ok(Self::new(conn))
    }
}
