use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::PrincipalRole;
use crate::models::imports::entities::ImportTarget;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::ImportService;

// 懒加载的全局 ImportService 实例
static IMPORT_SERVICE: Lazy<ImportService> = Lazy::new(ImportService::new_lazy);

// HTTP处理程序
pub async fn import_data(
    req: HttpRequest,
    target: web::Path<String>,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let target = match target.parse::<ImportTarget>() {
        Ok(target) => target,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ImportTargetInvalid,
                "无效的导入目标，支持: students, professors, subjects, routine",
            )));
        }
    };

    IMPORT_SERVICE.import(target, payload, &req).await
}

// 配置路由
pub fn configure_import_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/import")
            .wrap(middlewares::RequireAuth)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        PrincipalRole::admin_roles(),
                    ))
                    .route("/{target}", web::post().to(import_data)),
            ),
    );
}
