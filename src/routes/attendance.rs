use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::MarkAttendanceRequest;
use crate::models::auth::entities::PrincipalRole;
use crate::services::AttendanceService;
use crate::utils::SafeIdI64;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn roster(req: HttpRequest, routine_id: SafeIdI64) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.roster(routine_id.0, &req).await
}

pub async fn mark(
    req: HttpRequest,
    routine_id: SafeIdI64,
    mark_data: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark(routine_id.0, mark_data.into_inner(), &req)
        .await
}

pub async fn records(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.records(&req).await
}

pub async fn dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.dashboard(&req).await
}

pub async fn history(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.history(&req).await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    // 教师点名与记录
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireAuth)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        PrincipalRole::professor_roles(),
                    ))
                    .route("/roster/{id}", web::get().to(roster))
                    .route("/records", web::get().to(records))
                    .route("/{id}", web::post().to(mark)),
            ),
    );

    // 学生自助查询
    cfg.service(
        web::scope("/api/v1/student")
            .wrap(middlewares::RequireAuth)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        PrincipalRole::student_roles(),
                    ))
                    .route("/dashboard", web::get().to(dashboard))
                    .route("/attendance", web::get().to(history)),
            ),
    );
}
