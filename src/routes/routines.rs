use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::PrincipalRole;
use crate::models::routines::requests::CreateRoutineRequest;
use crate::services::RoutineService;
use crate::utils::SafeIdI64;

// 懒加载的全局 RoutineService 实例
static ROUTINE_SERVICE: Lazy<RoutineService> = Lazy::new(RoutineService::new_lazy);

// HTTP处理程序
pub async fn list_routines(req: HttpRequest) -> ActixResult<HttpResponse> {
    ROUTINE_SERVICE.list_routines(&req).await
}

pub async fn create_routine(
    req: HttpRequest,
    routine_data: web::Json<CreateRoutineRequest>,
) -> ActixResult<HttpResponse> {
    ROUTINE_SERVICE
        .create_routine(routine_data.into_inner(), &req)
        .await
}

pub async fn delete_routine(req: HttpRequest, routine_id: SafeIdI64) -> ActixResult<HttpResponse> {
    ROUTINE_SERVICE.delete_routine(routine_id.0, &req).await
}

pub async fn my_routines(req: HttpRequest) -> ActixResult<HttpResponse> {
    ROUTINE_SERVICE.my_routines(&req).await
}

// 配置路由
pub fn configure_routine_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/routines")
            .wrap(middlewares::RequireAuth)
            .service(
                web::scope("/mine")
                    .wrap(middlewares::RequireRole::new_any(
                        PrincipalRole::professor_roles(),
                    ))
                    .route("", web::get().to(my_routines)),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        PrincipalRole::admin_roles(),
                    ))
                    .route("", web::get().to(list_routines))
                    .route("", web::post().to(create_routine))
                    .route("/{id}", web::delete().to(delete_routine)),
            ),
    );
}
