use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::entities::PrincipalRole;
use crate::models::students::requests::CreateStudentRequest;
use crate::services::StudentService;
use crate::utils::SafeEnrolNo;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(student_data.into_inner(), &req)
        .await
}

pub async fn delete_student(req: HttpRequest, enrol_no: SafeEnrolNo) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&enrol_no.0, &req).await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireAuth)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        PrincipalRole::admin_roles(),
                    ))
                    .route("", web::get().to(list_students))
                    .route("", web::post().to(create_student))
                    .route("/{enrol_no}", web::delete().to(delete_student)),
            ),
    );
}
