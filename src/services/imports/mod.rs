pub mod import;
pub(crate) mod parse;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::imports::entities::ImportTarget;
use crate::storage::Storage;

pub struct ImportService {
    storage: Option<Arc<dyn Storage>>,
}

impl ImportService {
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

    // 批量导入
    pub async fn import(
        &self,
        target: ImportTarget,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import(self, target, payload, request).await
    }
}
