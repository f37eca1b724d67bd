use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::PrincipalRole;
use crate::services::AlertService;

// 懒加载的全局 AlertService 实例
static ALERT_SERVICE: Lazy<AlertService> = Lazy::new(AlertService::new_lazy);

// HTTP处理程序
pub async fn list_alerts(req: HttpRequest) -> ActixResult<HttpResponse> {
    ALERT_SERVICE.list_alerts(&req).await
}

// 配置路由
pub fn configure_alert_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/alerts")
            .wrap(middlewares::RequireAuth)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        PrincipalRole::admin_roles(),
                    ))
                    .route("", web::get().to(list_alerts)),
            ),
    );
}
