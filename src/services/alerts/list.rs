use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AlertService;
use crate::models::alerts::responses::AlertListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_alerts(
    service: &AlertService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 预警行由外部流程填充，这里只做只读报表
    match storage.list_alerts().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AlertListResponse {
                total: items.len(),
                items,
            },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询预警列表失败: {e}"),
            )),
        ),
    }
}
