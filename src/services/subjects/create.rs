use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::models::subjects::responses::SubjectResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_subject(
    service: &SubjectService,
    subject_data: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if subject_data.sub_code.trim().is_empty() || subject_data.sub_name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "科目代码与科目名称不能为空",
        )));
    }

    // 科目代码唯一性
    match storage.get_subject_by_code(&subject_data.sub_code).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SubjectAlreadyExists,
                "该科目代码已存在",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )),
            );
        }
    }

    match storage.create_subject(subject_data).await {
        Ok(subject) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubjectResponse { subject },
            "科目创建成功",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SubjectCreateFailed,
            format!("创建科目失败: {e}"),
        ))),
    }
}
