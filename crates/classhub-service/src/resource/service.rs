//! Course resources: listing, guarded creation, deletion.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use classhub_core::result::AppResult;
use classhub_database::{CourseStore, ResourceStore};
use classhub_entity::{NewResource, Resource};

use crate::guard::{
    RequiredFields, optional_text, require_absolute_uri, require_affected, require_reference,
};

/// Body of a resource creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateResourceRequest {
    pub course_code: Option<String>,
    pub description: Option<String>,
    pub publishers_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub link: Option<String>,
    pub vote: Option<i32>,
}

/// Handles course resources.
#[derive(Debug, Clone)]
pub struct ResourceService {
    resources: Arc<dyn ResourceStore>,
    courses: Arc<dyn CourseStore>,
}

impl ResourceService {
    /// Creates a new resource service.
    pub fn new(resources: Arc<dyn ResourceStore>, courses: Arc<dyn CourseStore>) -> Self {
        Self { resources, courses }
    }

    /// Lists every resource.
    pub async fn list(&self) -> AppResult<Vec<Resource>> {
        self.resources.find_all().await
    }

    /// Lists the resources of one course; unknown courses yield an empty list.
    pub async fn list_by_course(&self, course_code: &str) -> AppResult<Vec<Resource>> {
        self.resources.find_by_course(course_code).await
    }

    /// Creates a resource under an existing course.
    pub async fn create(&self, req: CreateResourceRequest) -> AppResult<Resource> {
        let mut required = RequiredFields::new();
        let course_code = required.text("course_code", req.course_code);
        let description = required.text("description", req.description);
        let kind = required.text("type", req.kind);
        let link = required.text("link", req.link);
        required.check()?;

        require_absolute_uri("link", &link)?;
        require_reference("course", &course_code, self.courses.exists(&course_code)).await?;

        let data = NewResource {
            course_code,
            description,
            publishers_name: optional_text(req.publishers_name),
            kind,
            link,
            vote: req.vote,
        };

        let resource = self.resources.create(&data).await?;
        info!(
            resource_id = resource.id,
            course_code = %resource.course_code,
            "Resource created"
        );
        Ok(resource)
    }

    /// Deletes a resource by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let rows = self.resources.delete(id).await?;
        require_affected(rows, "Resource")?;
        info!(resource_id = id, "Resource deleted");
        Ok(())
    }
}
