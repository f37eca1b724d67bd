pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::professors::requests::CreateProfessorRequest;
use crate::storage::Storage;

pub struct ProfessorService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfessorService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取教师列表
    pub async fn list_professors(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_professors(self, request).await
    }

    // 创建教师
    pub async fn create_professor(
        &self,
        professor_data: CreateProfessorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_professor(self, professor_data, request).await
    }

    // 删除教师
    pub async fn delete_professor(
        &self,
        prof_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_professor(self, prof_id, request).await
    }
}
