use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfessorService;
use crate::models::professors::requests::CreateProfessorRequest;
use crate::models::professors::responses::ProfessorResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password, validate_username};

pub async fn create_professor(
    service: &ProfessorService,
    mut professor_data: CreateProfessorRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 字段校验
    if let Err(msg) = validate_username(&professor_data.username)
        .and_then(|_| validate_email(&professor_data.email))
        .and_then(|_| validate_password(&professor_data.password))
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 用户名唯一性
    match storage
        .get_professor_by_username(&professor_data.username)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ProfessorAlreadyExists,
                "该用户名已存在",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询教师失败: {e}"),
                )),
            );
        }
    }

    // 哈希密码后再进入存储层
    professor_data.password = match hash_password(&professor_data.password) {
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

    match storage.create_professor(professor_data).await {
        Ok(professor) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProfessorResponse { professor },
            "教师创建成功",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ProfessorCreateFailed,
            format!("创建教师失败: {e}"),
        ))),
    }
}
