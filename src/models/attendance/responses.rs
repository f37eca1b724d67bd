use serde::Serialize;

use super::entities::{ProfessorRecordView, StudentAttendanceView, SubjectSummary};
use crate::models::routines::entities::RoutineView;
use crate::models::students::entities::Student;

// 点名名单响应（课程槽位 + 符合届别班级的全部学生）
#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub routine: RoutineView,
    pub current_date: chrono::NaiveDate,
    pub students: Vec<Student>,
}

// 批量点名结果
#[derive(Debug, Serialize)]
pub struct MarkAttendanceResponse {
    pub class_date: chrono::NaiveDate,
    pub marked: usize,
}

// 教师已录入的考勤记录列表
#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    pub total: usize,
    pub items: Vec<ProfessorRecordView>,
}

// 学生仪表盘（本班课表 + 分科目汇总）
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub timetable: Vec<RoutineView>,
    pub summary: Vec<SubjectSummary>,
}

// 学生考勤明细（按上课日期倒序）
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub total: usize,
    pub items: Vec<StudentAttendanceView>,
}
