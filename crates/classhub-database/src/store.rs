//! Store contracts consumed by the service and authorization layers.
//!
//! Each trait has a PostgreSQL implementation under
//! [`crate::repositories`] and an in-memory implementation in
//! [`crate::memory`]. Callers only ever hold `Arc<dyn ...>` handles.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use classhub_core::result::AppResult;
use classhub_entity::{
    ClassResource, Classroom, Course, NewClassResource, NewClassroom, NewCourse, NewResource,
    NewUser, Resource, User, UserRole,
};

use crate::memory::MemoryStore;
use crate::repositories::{
    ClassResourceRepository, ClassroomRepository, CourseRepository, ResourceRepository,
    UserRepository,
};
use crate::update::PartialUpdate;

/// Role lookup used by the authorization gate.
#[async_trait]
pub trait RoleStore: Send + Sync + Debug + 'static {
    /// Role recorded for `email`, or `None` when no such user exists.
    async fn find_role(&self, email: &str) -> AppResult<Option<UserRole>>;
}

/// User records.
#[async_trait]
pub trait UserStore: Send + Sync + Debug + 'static {
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a user. Fails with `Conflict` when the email is taken.
    async fn create(&self, data: &NewUser) -> AppResult<User>;

    /// Returns the number of rows changed.
    async fn update_role(&self, id: i64, role: UserRole) -> AppResult<u64>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// Course catalog.
#[async_trait]
pub trait CourseStore: Send + Sync + Debug + 'static {
    async fn find_all(&self) -> AppResult<Vec<Course>>;

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Course>>;

    async fn exists(&self, code: &str) -> AppResult<bool>;

    async fn create(&self, data: &NewCourse) -> AppResult<Course>;

    /// Apply `changes` to the course keyed by `code`; returns rows changed.
    async fn update(&self, code: &str, changes: &PartialUpdate) -> AppResult<u64>;

    /// Delete a course and, by cascade, its resources and classrooms.
    async fn delete(&self, code: &str) -> AppResult<u64>;
}

/// Course resources.
#[async_trait]
pub trait ResourceStore: Send + Sync + Debug + 'static {
    async fn find_all(&self) -> AppResult<Vec<Resource>>;

    async fn find_by_course(&self, course_code: &str) -> AppResult<Vec<Resource>>;

    /// Insert a resource. Fails with `Conflict` when the link is taken and
    /// `ReferenceNotFound` when the course does not exist.
    async fn create(&self, data: &NewResource) -> AppResult<Resource>;

    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// Classrooms.
#[async_trait]
pub trait ClassroomStore: Send + Sync + Debug + 'static {
    async fn find_all(&self) -> AppResult<Vec<Classroom>>;

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Classroom>>;

    /// Exact-match existence check.
    async fn exists(&self, code: &str) -> AppResult<bool>;

    /// Whether any classroom uses `code`, ignoring surrounding whitespace
    /// and letter case.
    async fn code_taken(&self, code: &str) -> AppResult<bool>;

    async fn create(&self, data: &NewClassroom) -> AppResult<Classroom>;

    async fn update(&self, code: &str, changes: &PartialUpdate) -> AppResult<u64>;

    async fn delete(&self, code: &str) -> AppResult<u64>;
}

/// Resources posted to classrooms.
#[async_trait]
pub trait ClassResourceStore: Send + Sync + Debug + 'static {
    async fn find_all(&self) -> AppResult<Vec<ClassResource>>;

    async fn find_by_class(&self, class_code: &str) -> AppResult<Vec<ClassResource>>;

    async fn create(&self, data: &NewClassResource) -> AppResult<ClassResource>;

    async fn delete(&self, id: i64) -> AppResult<u64>;
}

/// One handle per store contract, all backed by the same provider.
#[derive(Debug, Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub roles: Arc<dyn RoleStore>,
    pub courses: Arc<dyn CourseStore>,
    pub resources: Arc<dyn ResourceStore>,
    pub classrooms: Arc<dyn ClassroomStore>,
    pub class_resources: Arc<dyn ClassResourceStore>,
}

impl Stores {
    /// PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        let users = Arc::new(UserRepository::new(pool.clone()));
        Self {
            users: users.clone(),
            roles: users,
            courses: Arc::new(CourseRepository::new(pool.clone())),
            resources: Arc::new(ResourceRepository::new(pool.clone())),
            classrooms: Arc::new(ClassroomRepository::new(pool.clone())),
            class_resources: Arc::new(ClassResourceRepository::new(pool)),
        }
    }

    /// Every contract served by the same in-memory store.
    pub fn memory(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            roles: store.clone(),
            courses: store.clone(),
            resources: store.clone(),
            classrooms: store.clone(),
            class_resources: store,
        }
    }
}
