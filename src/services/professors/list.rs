use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfessorService;
use crate::models::professors::responses::ProfessorListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_professors(
    service: &ProfessorService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_professors().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProfessorListResponse {
                total: items.len(),
                items,
            },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询教师列表失败: {e}"),
            )),
        ),
    }
}
