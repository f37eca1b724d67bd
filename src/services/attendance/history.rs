use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireAuth;
use crate::models::attendance::responses::HistoryResponse;
use crate::models::auth::entities::Principal;
use crate::models::{ApiResponse, ErrorCode};

pub async fn history(
    service: &AttendanceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前学生主体
    let student = match RequireAuth::extract_principal(request) {
        Some(Principal::Student(student)) => student,
        _ => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Access denied.",
            )));
        }
    };

    // 明细按上课日期倒序，由存储层排好
    match storage.list_attendance_by_student(&student.enrol_no).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            HistoryResponse {
                total: items.len(),
                items,
            },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询学生考勤失败: {e}"),
            )),
        ),
    }
}
