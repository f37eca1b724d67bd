use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::PrincipalRole;
use crate::models::professors::requests::CreateProfessorRequest;
use crate::services::ProfessorService;
use crate::utils::SafeIdI64;

// 懒加载的全局 ProfessorService 实例
static PROFESSOR_SERVICE: Lazy<ProfessorService> = Lazy::new(ProfessorService::new_lazy);

// HTTP处理程序
pub async fn list_professors(req: HttpRequest) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE.list_professors(&req).await
}

pub async fn create_professor(
    req: HttpRequest,
    professor_data: web::Json<CreateProfessorRequest>,
) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE
        .create_professor(professor_data.into_inner(), &req)
        .await
}

pub async fn delete_professor(req: HttpRequest, prof_id: SafeIdI64) -> ActixResult<HttpResponse> {
    PROFESSOR_SERVICE.delete_professor(prof_id.0, &req).await
}

// 配置路由
pub fn configure_professor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/professors")
            .wrap(middlewares::RequireAuth)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        PrincipalRole::admin_roles(),
                    ))
                    .route("", web::get().to(list_professors))
                    .route("", web::post().to(create_professor))
                    .route("/{id}", web::delete().to(delete_professor)),
            ),
    );
}
