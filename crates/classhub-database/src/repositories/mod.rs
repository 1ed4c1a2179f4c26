//! PostgreSQL repository implementations for all ClassHub entities.

pub mod class_resource;
pub mod classroom;
pub mod course;
pub mod resource;
pub mod user;

pub use class_resource::ClassResourceRepository;
pub use classroom::ClassroomRepository;
pub use course::CourseRepository;
pub use resource::ResourceRepository;
pub use user::UserRepository;

use sqlx::Postgres;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::types::Json;

use crate::update::FieldValue;

/// Bind one partial update value to the next placeholder.
pub(crate) fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &'q FieldValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        FieldValue::Null => query.bind(None::<String>),
        FieldValue::Text(s) => query.bind(s.as_str()),
        FieldValue::Boolean(b) => query.bind(*b),
        FieldValue::Float(f) => query.bind(*f),
        FieldValue::Integer(i) => query.bind(*i),
        FieldValue::Json(v) => query.bind(Json(v)),
    }
}
