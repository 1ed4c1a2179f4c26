//! Resources posted to a classroom.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use classhub_core::result::AppResult;
use classhub_database::{ClassResourceStore, ClassroomStore};
use classhub_entity::{ClassResource, NewClassResource};

use crate::guard::{
    RequiredFields, optional_text, require_absolute_uri, require_affected, require_reference,
};

/// Body of a class resource creation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateClassResourceRequest {
    pub class_code: Option<String>,
    pub course_code: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub link: Option<String>,
}

/// Handles class resources.
#[derive(Debug, Clone)]
pub struct ClassResourceService {
    resources: Arc<dyn ClassResourceStore>,
    classrooms: Arc<dyn ClassroomStore>,
}

impl ClassResourceService {
    /// Creates a new class resource service.
    pub fn new(
        resources: Arc<dyn ClassResourceStore>,
        classrooms: Arc<dyn ClassroomStore>,
    ) -> Self {
        Self {
            resources,
            classrooms,
        }
    }

    /// Lists every class resource.
    pub async fn list(&self) -> AppResult<Vec<ClassResource>> {
        self.resources.find_all().await
    }

    /// Lists the resources posted to one classroom.
    pub async fn list_by_class(&self, class_code: &str) -> AppResult<Vec<ClassResource>> {
        self.resources.find_by_class(class_code).await
    }

    /// Posts a resource to an existing classroom.
    pub async fn create(&self, req: CreateClassResourceRequest) -> AppResult<ClassResource> {
        let mut required = RequiredFields::new();
        let class_code = required.text("class_code", req.class_code);
        let description = required.text("description", req.description);
        let kind = required.text("type", req.kind);
        let link = required.text("link", req.link);
        required.check()?;

        require_absolute_uri("link", &link)?;
        require_reference("classroom", &class_code, self.classrooms.exists(&class_code)).await?;

        let data = NewClassResource {
            class_code,
            course_code: optional_text(req.course_code),
            description,
            kind,
            link,
        };

        let resource = self.resources.create(&data).await?;
        info!(
            class_resource_id = resource.id,
            class_code = %resource.class_code,
            "Class resource created"
        );
        Ok(resource)
    }

    /// Deletes a class resource by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let rows = self.resources.delete(id).await?;
        require_affected(rows, "Class resource")?;
        info!(class_resource_id = id, "Class resource deleted");
        Ok(())
    }
}
