use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoutineService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_routine(
    service: &RoutineService,
    routine_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_routine(routine_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Routine deleted successfully")))
        }
        // 目标不存在按"未找到"报告，表保持不变
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RoutineNotFound,
            "Routine not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RoutineDeleteFailed,
                format!("删除课程表失败: {e}"),
            )),
        ),
    }
}
