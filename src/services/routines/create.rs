use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RoutineService;
use crate::models::routines::requests::{CreateRoutineRequest, NewRoutineRecord};
use crate::models::routines::responses::RoutineResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_routine(
    service: &RoutineService,
    routine_data: CreateRoutineRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 解析自然键引用。任何一个未命中都拒绝整个操作，不产生部分写入。
    let subject = match storage.get_subject_by_code(&routine_data.sub_code).await {
        Ok(subject) => subject,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )),
            );
        }
    };

    let professor = match storage
        .get_professor_by_username(&routine_data.prof_username)
        .await
    {
        Ok(professor) => professor,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询教师失败: {e}"),
                )),
            );
        }
    };

    let (subject, professor) = match (subject, professor) {
        (Some(subject), Some(professor)) => (subject, professor),
        _ => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::RoutineInvalidReference,
                "Invalid subject code or professor username",
            )));
        }
    };

    let record = NewRoutineRecord {
        day: routine_data.day,
        timing: routine_data.timing,
        year: routine_data.year,
        section: routine_data.section,
        sub_id: Some(subject.sub_id),
        prof_id: Some(professor.prof_id),
    };

    let created = match storage.create_routine(record).await {
        Ok(routine) => routine,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::RoutineCreateFailed,
                format!("创建课程表失败: {e}"),
            )));
        }
    };

    // 返回连接了科目/教师字段的视图
    match storage.get_routine_view_by_id(created.routine_id).await {
        Ok(Some(routine)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RoutineResponse { routine },
            "课程表创建成功",
        ))),
        Ok(None) => Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::RoutineNotFound,
            "课程表创建后查询失败",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询课程表失败: {e}"),
            )),
        ),
    }
}
