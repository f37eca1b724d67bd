use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::subjects::responses::SubjectListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_subjects(
    service: &SubjectService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_subjects().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectListResponse {
                total: items.len(),
                items,
            },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询科目列表失败: {e}"),
            )),
        ),
    }
}
