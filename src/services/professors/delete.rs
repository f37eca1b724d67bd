use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfessorService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_professor(
    service: &ProfessorService,
    prof_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_professor(prof_id).await {
        Ok(true) => Ok(
            HttpResponse::Ok().json(ApiResponse::success_empty("Professor deleted successfully"))
        ),
        // 目标不存在按"未找到"报告，表保持不变
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProfessorNotFound,
            "Professor not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ProfessorDeleteFailed,
                format!("删除教师失败: {e}"),
            )),
        ),
    }
}
