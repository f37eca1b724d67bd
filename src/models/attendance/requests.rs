use std::collections::HashMap;

use serde::Deserialize;

use super::entities::AttendanceStatus;

// 批量点名请求
//
// statuses 以注册号为键。名单内缺失的学生按 absent 记录；
// 名单外的键被忽略。日期缺失或为空白时取服务器当前日期。
#[derive(Debug, Deserialize)]
pub struct MarkAttendanceRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub statuses: HashMap<String, AttendanceStatus>,
}

// 考勤写入记录（用于存储层）
#[derive(Debug, Clone)]
pub struct NewAttendanceRecord {
    pub enrol_no: String,
    pub class_date: chrono::NaiveDate,
    pub routine_id: Option<i64>,
    pub period: Option<String>,
    pub sub_id: Option<i64>,
    pub prof_id: Option<i64>,
    pub status: AttendanceStatus,
    pub marked_by: Option<i64>,
    pub remarks: Option<String>,
}
