use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireAuth;
use crate::models::attendance::entities::{StudentAttendanceView, SubjectSummary};
use crate::models::attendance::responses::DashboardResponse;
use crate::models::auth::entities::Principal;
use crate::models::{ApiResponse, ErrorCode};

/// 从台账记录实时计算分科目汇总
///
/// 只有至少有一条记录的科目才会出现；出勤按 status 与 "present"
/// 不区分大小写比较；百分比保留两位小数。
pub fn summarize(records: &[StudentAttendanceView]) -> Vec<SubjectSummary> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, (u32, u32)> = HashMap::new();

    for record in records {
        // 科目已被删除的记录无法归入任何科目
        let Some(sub_name) = record.sub_name.as_deref() else {
            continue;
        };

        let entry = counts.entry(sub_name).or_insert_with(|| {
            order.push(sub_name);
            (0, 0)
        });
        entry.0 += 1;
        if record.status.eq_ignore_ascii_case("present") {
            entry.1 += 1;
        }
    }

    order
        .into_iter()
        .map(|sub_name| {
            let (total, attended) = counts[sub_name];
            let percent = (f64::from(attended) / f64::from(total) * 100.0 * 100.0).round() / 100.0;
            SubjectSummary {
                subject: sub_name.to_string(),
                total,
                attended,
                percent,
            }
        })
        .collect()
}

pub async fn dashboard(
    service: &AttendanceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前学生主体
    let student = match RequireAuth::extract_principal(request) {
        Some(Principal::Student(student)) => student,
        _ => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Access denied.",
            )));
        }
    };

    // 本班课表
    let mut timetable = match storage
        .list_routines_by_cohort(student.year, &student.section)
        .await
    {
        Ok(timetable) => timetable,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级课程表失败: {e}"),
                )),
            );
        }
    };
    crate::services::routines::sort_by_day_then_timing(&mut timetable);

    // 分科目汇总总是从台账实时计算
    let records = match storage.list_attendance_by_student(&student.enrol_no).await {
        Ok(records) => records,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生考勤失败: {e}"),
                )),
            );
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DashboardResponse {
            timetable,
            summary: summarize(&records),
        },
        "查询成功",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sub_name: Option<&str>, date: &str, status: &str) -> StudentAttendanceView {
        StudentAttendanceView {
            attendance_id: 0,
            class_date: date.parse().expect("valid date literal"),
            sub_name: sub_name.map(|s| s.to_string()),
            status: status.to_string(),
            remarks: None,
        }
    }

    #[test]
    fn test_single_present_row_is_one_hundred_percent() {
        let summary = summarize(&[record(Some("Algorithms"), "2024-01-15", "present")]);
        assert_eq!(
            summary,
            vec![SubjectSummary {
                subject: "Algorithms".to_string(),
                total: 1,
                attended: 1,
                percent: 100.0,
            }]
        );
    }

    #[test]
    fn test_zero_row_subjects_are_omitted() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn test_present_match_is_case_insensitive() {
        let summary = summarize(&[
            record(Some("Algorithms"), "2024-01-15", "Present"),
            record(Some("Algorithms"), "2024-01-16", "PRESENT"),
            record(Some("Algorithms"), "2024-01-17", "absent"),
        ]);
        assert_eq!(summary[0].total, 3);
        assert_eq!(summary[0].attended, 2);
    }

    #[test]
    fn test_percent_is_rounded_to_two_decimals() {
        let summary = summarize(&[
            record(Some("Physics"), "2024-01-15", "present"),
            record(Some("Physics"), "2024-01-16", "absent"),
            record(Some("Physics"), "2024-01-17", "absent"),
        ]);
        assert_eq!(summary[0].percent, 33.33);
    }

    #[test]
    fn test_subjects_are_grouped_independently() {
        let summary = summarize(&[
            record(Some("Algorithms"), "2024-01-15", "present"),
            record(Some("Physics"), "2024-01-15", "leave"),
            record(Some("Algorithms"), "2024-01-16", "late"),
        ]);
        assert_eq!(summary.len(), 2);
        let algo = summary.iter().find(|s| s.subject == "Algorithms").unwrap();
        assert_eq!((algo.total, algo.attended), (2, 1));
        let physics = summary.iter().find(|s| s.subject == "Physics").unwrap();
        // leave/late 不计入出勤
        assert_eq!((physics.total, physics.attended), (1, 0));
    }

    #[test]
    fn test_records_without_subject_are_skipped() {
        let summary = summarize(&[
            record(None, "2024-01-15", "present"),
            record(Some("Algorithms"), "2024-01-15", "present"),
        ]);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].subject, "Algorithms");
    }
}
