//! In-memory store.
//!
//! Implements every store contract over a single lock-protected set of
//! tables with the same constraints as the PostgreSQL schema: unique emails,
//! course codes, class codes and resource links; foreign keys from resources
//! and classrooms to courses and from class resources to classrooms; and
//! cascading deletes and key renames along those references.
//!
//! The store also counts reads and writes and can simulate an outage, so
//! tests can assert whether (and how) a request reached the store.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use classhub_core::error::AppError;
use classhub_core::result::AppResult;
use classhub_entity::{
    ClassResource, Classroom, Course, NewClassResource, NewClassroom, NewCourse, NewResource,
    NewUser, Resource, User, UserRole,
};

use crate::store::{
    ClassResourceStore, ClassroomStore, CourseStore, ResourceStore, RoleStore, UserStore,
};
use crate::update::{FieldValue, PartialUpdate};

#[derive(Debug, Default)]
struct Tables {
    next_id: i64,
    users: Vec<User>,
    courses: BTreeMap<String, Course>,
    resources: Vec<Resource>,
    classrooms: Vec<Classroom>,
    class_resources: Vec<ClassResource>,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn classroom_exists(&self, code: &str) -> bool {
        self.classrooms.iter().any(|c| c.class_code == code)
    }

    /// Remove classrooms matching `pred` together with their class resources.
    fn remove_classrooms(&mut self, pred: impl Fn(&Classroom) -> bool) -> u64 {
        let removed: Vec<String> = self
            .classrooms
            .iter()
            .filter(|c| pred(c))
            .map(|c| c.class_code.clone())
            .collect();
        self.classrooms.retain(|c| !pred(c));
        self.class_resources
            .retain(|r| !removed.contains(&r.class_code));
        removed.len() as u64
    }
}

/// Store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    reads: AtomicU64,
    writes: AtomicU64,
    outage: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a `Database` error until
    /// switched off again.
    pub fn simulate_outage(&self, enabled: bool) {
        self.outage.store(enabled, Ordering::SeqCst);
    }

    /// Number of read operations attempted.
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of write operations attempted.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    /// Reset both counters, typically after seeding.
    pub fn reset_counters(&self) {
        self.reads.store(0, Ordering::SeqCst);
        self.writes.store(0, Ordering::SeqCst);
    }

    fn begin_read(&self) -> AppResult<()> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check_available()
    }

    fn begin_write(&self) -> AppResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check_available()
    }

    fn check_available(&self) -> AppResult<()> {
        if self.outage.load(Ordering::SeqCst) {
            return Err(AppError::database("store unavailable"));
        }
        Ok(())
    }
}

fn unknown_column(table: &str, column: &str) -> AppError {
    AppError::database(format!(
        "column \"{column}\" of relation \"{table}\" does not exist"
    ))
}

fn type_mismatch(column: &str) -> AppError {
    AppError::database(format!("invalid value for column \"{column}\""))
}

fn required_text(column: &str, value: &FieldValue) -> AppResult<String> {
    match value {
        FieldValue::Text(s) => Ok(s.clone()),
        FieldValue::Null => Err(AppError::database(format!(
            "null value in column \"{column}\" violates not-null constraint"
        ))),
        other => other.as_text().ok_or_else(|| type_mismatch(column)),
    }
}

fn optional_text(value: &FieldValue) -> Option<String> {
    value.as_text()
}

fn apply_course(course: &mut Course, changes: &PartialUpdate) -> AppResult<()> {
    for assignment in changes.assignments() {
        let column = assignment.column.as_str();
        let value = &assignment.value;
        match column {
            "course_code" => course.course_code = required_text(column, value)?,
            "course_title" => course.course_title = required_text(column, value)?,
            "pre_requisite" => course.pre_requisite = optional_text(value),
            "soft_pre_requisite" => course.soft_pre_requisite = optional_text(value),
            "course_description" => course.course_description = optional_text(value),
            "lab" => match value {
                FieldValue::Boolean(b) => course.lab = *b,
                _ => return Err(type_mismatch(column)),
            },
            "credit" => match value {
                FieldValue::Float(f) => course.credit = *f,
                FieldValue::Integer(i) => course.credit = *i as f64,
                _ => return Err(type_mismatch(column)),
            },
            _ => return Err(unknown_column("courses", column)),
        }
    }
    Ok(())
}

fn apply_classroom(classroom: &mut Classroom, changes: &PartialUpdate) -> AppResult<()> {
    for assignment in changes.assignments() {
        let column = assignment.column.as_str();
        let value = &assignment.value;
        match column {
            "class_code" => classroom.class_code = required_text(column, value)?,
            "course_code" => classroom.course_code = required_text(column, value)?,
            "email" => classroom.email = optional_text(value),
            "faculty_initial" => classroom.faculty_initial = optional_text(value),
            "section" => classroom.section = optional_text(value),
            "semester" => classroom.semester = optional_text(value),
            _ => return Err(unknown_column("classroom", column)),
        }
    }
    Ok(())
}

#[async_trait]
impl RoleStore for MemoryStore {
    async fn find_role(&self, email: &str) -> AppResult<Option<UserRole>> {
        self.begin_read()?;
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.role))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.begin_read()?;
        Ok(self.tables.read().await.users.clone())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.begin_read()?;
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == data.email) {
            return Err(AppError::conflict("Email already in use"));
        }
        let user = User {
            id: tables.allocate_id(),
            name: data.name.clone(),
            email: data.email.clone(),
            role: data.role,
        };
        tables.users.push(user.clone());
        debug!(user_id = user.id, "Inserted user");
        Ok(user)
    }

    async fn update_role(&self, id: i64, role: UserRole) -> AppResult<u64> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        match tables.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.role = role;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        let before = tables.users.len();
        tables.users.retain(|u| u.id != id);
        Ok((before - tables.users.len()) as u64)
    }
}

#[async_trait]
impl CourseStore for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Course>> {
        self.begin_read()?;
        Ok(self.tables.read().await.courses.values().cloned().collect())
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Course>> {
        self.begin_read()?;
        Ok(self.tables.read().await.courses.get(code).cloned())
    }

    async fn exists(&self, code: &str) -> AppResult<bool> {
        self.begin_read()?;
        Ok(self.tables.read().await.courses.contains_key(code))
    }

    async fn create(&self, data: &NewCourse) -> AppResult<Course> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        if tables.courses.contains_key(&data.course_code) {
            return Err(AppError::conflict(format!(
                "Course '{}' already exists",
                data.course_code
            )));
        }
        let course = data.clone().into_course();
        tables
            .courses
            .insert(course.course_code.clone(), course.clone());
        Ok(course)
    }

    async fn update(&self, code: &str, changes: &PartialUpdate) -> AppResult<u64> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        let Some(current) = tables.courses.get(code) else {
            return Ok(0);
        };

        let mut updated = current.clone();
        apply_course(&mut updated, changes)?;

        let new_code = updated.course_code.clone();
        if new_code != code {
            if tables.courses.contains_key(&new_code) {
                return Err(AppError::conflict("Course code already in use"));
            }
            tables.courses.remove(code);
            for resource in tables.resources.iter_mut().filter(|r| r.course_code == code) {
                resource.course_code = new_code.clone();
            }
            for classroom in tables.classrooms.iter_mut().filter(|c| c.course_code == code) {
                classroom.course_code = new_code.clone();
            }
        }
        tables.courses.insert(new_code, updated);
        Ok(1)
    }

    async fn delete(&self, code: &str) -> AppResult<u64> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        if tables.courses.remove(code).is_none() {
            return Ok(0);
        }
        tables.resources.retain(|r| r.course_code != code);
        tables.remove_classrooms(|c| c.course_code == code);
        Ok(1)
    }
}

#[async_trait]
impl ResourceStore for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Resource>> {
        self.begin_read()?;
        Ok(self.tables.read().await.resources.clone())
    }

    async fn find_by_course(&self, course_code: &str) -> AppResult<Vec<Resource>> {
        self.begin_read()?;
        let tables = self.tables.read().await;
        Ok(tables
            .resources
            .iter()
            .filter(|r| r.course_code == course_code)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &NewResource) -> AppResult<Resource> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        if tables.resources.iter().any(|r| r.link == data.link) {
            return Err(AppError::conflict(
                "A resource with this link already exists",
            ));
        }
        if !tables.courses.contains_key(&data.course_code) {
            return Err(AppError::reference_not_found("course", &data.course_code));
        }
        let resource = Resource {
            id: tables.allocate_id(),
            course_code: data.course_code.clone(),
            description: data.description.clone(),
            publishers_name: data.publishers_name.clone(),
            kind: data.kind.clone(),
            link: data.link.clone(),
            vote: data.vote.unwrap_or(0),
        };
        tables.resources.push(resource.clone());
        Ok(resource)
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        let before = tables.resources.len();
        tables.resources.retain(|r| r.id != id);
        Ok((before - tables.resources.len()) as u64)
    }
}

#[async_trait]
impl ClassroomStore for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<Classroom>> {
        self.begin_read()?;
        Ok(self.tables.read().await.classrooms.clone())
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Classroom>> {
        self.begin_read()?;
        let tables = self.tables.read().await;
        Ok(tables
            .classrooms
            .iter()
            .find(|c| c.class_code == code)
            .cloned())
    }

    async fn exists(&self, code: &str) -> AppResult<bool> {
        self.begin_read()?;
        Ok(self.tables.read().await.classroom_exists(code))
    }

    async fn code_taken(&self, code: &str) -> AppResult<bool> {
        self.begin_read()?;
        let wanted = code.trim().to_uppercase();
        let tables = self.tables.read().await;
        Ok(tables
            .classrooms
            .iter()
            .any(|c| c.class_code.trim().to_uppercase() == wanted))
    }

    async fn create(&self, data: &NewClassroom) -> AppResult<Classroom> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        if tables.classroom_exists(&data.class_code) {
            return Err(AppError::conflict(format!(
                "Class code '{}' already exists",
                data.class_code
            )));
        }
        if !tables.courses.contains_key(&data.course_code) {
            return Err(AppError::reference_not_found("course", &data.course_code));
        }
        let classroom = Classroom {
            id: tables.allocate_id(),
            class_code: data.class_code.clone(),
            course_code: data.course_code.clone(),
            email: data.email.clone(),
            faculty_initial: data.faculty_initial.clone(),
            section: data.section.clone(),
            semester: data.semester.clone(),
        };
        tables.classrooms.push(classroom.clone());
        Ok(classroom)
    }

    async fn update(&self, code: &str, changes: &PartialUpdate) -> AppResult<u64> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        let Some(index) = tables.classrooms.iter().position(|c| c.class_code == code) else {
            return Ok(0);
        };

        let mut updated = tables.classrooms[index].clone();
        apply_classroom(&mut updated, changes)?;

        if updated.class_code != code && tables.classroom_exists(&updated.class_code) {
            return Err(AppError::conflict("Class code already in use"));
        }
        if !tables.courses.contains_key(&updated.course_code) {
            return Err(AppError::reference_not_found(
                "course",
                &updated.course_code,
            ));
        }

        if updated.class_code != code {
            for resource in tables
                .class_resources
                .iter_mut()
                .filter(|r| r.class_code == code)
            {
                resource.class_code = updated.class_code.clone();
            }
        }
        tables.classrooms[index] = updated;
        Ok(1)
    }

    async fn delete(&self, code: &str) -> AppResult<u64> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        Ok(tables.remove_classrooms(|c| c.class_code == code))
    }
}

#[async_trait]
impl ClassResourceStore for MemoryStore {
    async fn find_all(&self) -> AppResult<Vec<ClassResource>> {
        self.begin_read()?;
        Ok(self.tables.read().await.class_resources.clone())
    }

    async fn find_by_class(&self, class_code: &str) -> AppResult<Vec<ClassResource>> {
        self.begin_read()?;
        let tables = self.tables.read().await;
        Ok(tables
            .class_resources
            .iter()
            .filter(|r| r.class_code == class_code)
            .cloned()
            .collect())
    }

    async fn create(&self, data: &NewClassResource) -> AppResult<ClassResource> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        if !tables.classroom_exists(&data.class_code) {
            return Err(AppError::reference_not_found("classroom", &data.class_code));
        }
        let resource = ClassResource {
            id: tables.allocate_id(),
            class_code: data.class_code.clone(),
            course_code: data.course_code.clone(),
            description: data.description.clone(),
            kind: data.kind.clone(),
            link: data.link.clone(),
        };
        tables.class_resources.push(resource.clone());
        Ok(resource)
    }

    async fn delete(&self, id: i64) -> AppResult<u64> {
        self.begin_write()?;
        let mut tables = self.tables.write().await;
        let before = tables.class_resources.len();
        tables.class_resources.retain(|r| r.id != id);
        Ok((before - tables.class_resources.len()) as u64)
    }
}
