use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireAuth;
use crate::models::attendance::responses::RecordListResponse;
use crate::models::auth::entities::Principal;
use crate::models::{ApiResponse, ErrorCode};

pub async fn records(
    service: &AttendanceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前教师主体
    let professor = match RequireAuth::extract_principal(request) {
        Some(Principal::Professor(professor)) => professor,
        _ => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Access denied.",
            )));
        }
    };

    match storage.list_attendance_by_professor(professor.prof_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RecordListResponse {
                total: items.len(),
                items,
            },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询考勤记录失败: {e}"),
            )),
        ),
    }
}
