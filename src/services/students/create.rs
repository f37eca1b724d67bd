use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::students::responses::StudentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_enrol_no, validate_password};

pub async fn create_student(
    service: &StudentService,
    mut student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Err(msg) = validate_enrol_no(&student_data.enrol_no)
        .and_then(|_| validate_email(&student_data.email))
        .and_then(|_| validate_password(&student_data.password))
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 注册号唯一性
    match storage.get_student_by_enrol_no(&student_data.enrol_no).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::StudentAlreadyExists,
                "该注册号已存在",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    }

    // 哈希密码后再进入存储层
    student_data.password = match hash_password(&student_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("密码哈希失败: {e}"),
                )),
            );
        }
    };

    match storage.create_student(student_data).await {
        Ok(student) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse { student },
            "学生创建成功",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::StudentCreateFailed,
            format!("创建学生失败: {e}"),
        ))),
    }
}
