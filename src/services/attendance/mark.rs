use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireAuth;
use crate::models::attendance::entities::AttendanceStatus;
use crate::models::attendance::requests::{MarkAttendanceRequest, NewAttendanceRecord};
use crate::models::attendance::responses::MarkAttendanceResponse;
use crate::models::auth::entities::Principal;
use crate::models::{ApiResponse, ErrorCode};

/// 解析上课日期；缺失或空白时取服务器当前日期
fn parse_class_date(date: Option<&str>) -> Result<chrono::NaiveDate, chrono::ParseError> {
    match date {
        Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<chrono::NaiveDate>(),
        _ => Ok(chrono::Local::now().date_naive()),
    }
}

pub async fn mark(
    service: &AttendanceService,
    routine_id: i64,
    mark_data: MarkAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前教师主体
    let professor = match RequireAuth::extract_principal(request) {
        Some(Principal::Professor(professor)) => professor,
        _ => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Access denied.",
            )));
        }
    };

    // 槽位必须存在且属于当前教师
    let routine =
        match super::resolve_owned_routine(&storage, routine_id, professor.prof_id).await {
            Ok(routine) => routine,
            Err(response) => return Ok(response),
        };

    let class_date = match parse_class_date(mark_data.date.as_deref()) {
        Ok(date) => date,
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                format!("无效的日期: {e}"),
            )));
        }
    };

    // 名单 = 届别与班级都匹配该槽位的全部学生
    let students = match storage
        .list_students_by_cohort(routine.year, &routine.section)
        .await
    {
        Ok(students) => students,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询点名名单失败: {e}"),
                )),
            );
        }
    };

    // 每个名单学生一条台账记录；提交里缺失的学生按 absent 记录。
    // 名单以外的键不会产生记录。
    let rows: Vec<NewAttendanceRecord> = students
        .iter()
        .map(|student| NewAttendanceRecord {
            enrol_no: student.enrol_no.clone(),
            class_date,
            routine_id: Some(routine.routine_id),
            period: None,
            sub_id: routine.sub_id,
            prof_id: Some(professor.prof_id),
            status: mark_data
                .statuses
                .get(&student.enrol_no)
                .copied()
                .unwrap_or(AttendanceStatus::Absent),
            marked_by: Some(professor.prof_id),
            remarks: None,
        })
        .collect();

    // 只追加：重复提交同一槽位同一日期会追加第二批记录，不做去重
    match storage.insert_attendance_batch(rows).await {
        Ok(marked) => {
            tracing::info!(
                "Professor {} marked attendance for routine {} on {} ({} students)",
                professor.username,
                routine.routine_id,
                class_date,
                marked
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                MarkAttendanceResponse { class_date, marked },
                "Attendance saved successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::AttendanceMarkFailed,
                format!("保存考勤失败: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_date_is_parsed() {
        let date = parse_class_date(Some("2024-01-15")).unwrap();
        assert_eq!(date.to_string(), "2024-01-15");
    }

    #[test]
    fn test_blank_date_defaults_to_today() {
        let today = chrono::Local::now().date_naive();
        assert_eq!(parse_class_date(None).unwrap(), today);
        assert_eq!(parse_class_date(Some("")).unwrap(), today);
        assert_eq!(parse_class_date(Some("   ")).unwrap(), today);
    }

    #[test]
    fn test_garbage_date_is_rejected() {
        assert!(parse_class_date(Some("15/01/2024")).is_err());
        assert!(parse_class_date(Some("not-a-date")).is_err());
    }
}
