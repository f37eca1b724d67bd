use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireAuth;
use crate::models::attendance::responses::RosterResponse;
use crate::models::auth::entities::Principal;
use crate::models::{ApiResponse, ErrorCode};

pub async fn roster(
    service: &AttendanceService,
    routine_id: i64,
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

    // 槽位必须存在且属于当前教师
    let routine =
        match super::resolve_owned_routine(&storage, routine_id, professor.prof_id).await {
            Ok(routine) => routine,
            Err(response) => return Ok(response),
        };

    // 名单 = 届别与班级都匹配该槽位的全部学生
    let students = match storage
        .list_students_by_cohort(routine.year, &routine.section)
        .await
    {
        Ok(students) => students,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询点名名单失败: {e}"),
                )),
            );
        }
    };

    let routine_view = match storage.get_routine_view_by_id(routine_id).await {
        Ok(Some(view)) => view,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::RoutineNotFound,
                "Invalid routine",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程表失败: {e}"),
                )),
            );
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        RosterResponse {
            routine: routine_view,
            current_date: chrono::Local::now().date_naive(),
            students,
        },
        "查询成功",
    )))
}
