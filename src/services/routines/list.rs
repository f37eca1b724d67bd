use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoutineService;
use crate::models::routines::responses::RoutineListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_routines(
    service: &RoutineService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_routines().await {
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
                format!("查询课程表列表失败: {e}"),
            )),
        ),
    }
}
