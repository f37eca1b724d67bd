use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoutineService;
use crate::middlewares::RequireAuth;
use crate::models::auth::entities::Principal;
use crate::models::routines::responses::RoutineListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn my_routines(
    service: &RoutineService,
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

    match storage.list_routines_by_professor(professor.prof_id).await {
        Ok(mut items) => {
            super::sort_by_day_then_timing(&mut items);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                RoutineListResponse {
                    total: items.len(),
                    items,
                },
                "查询成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询教师课程表失败: {e}"),
            )),
        ),
    }
}
