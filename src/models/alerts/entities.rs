use sea_orm::FromQueryResult;
use serde::Serialize;

// 考勤预警视图（连接学生与科目描述字段）
//
// 预警行由外部流程写入，本系统只读取。
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct AlertView {
    pub alert_id: i64,
    pub alert_type: String,
    pub percent: f64,
    pub class_date: chrono::NaiveDate,
    pub enrol_no: String,
    pub student_name: String,
    pub sub_name: Option<String>,
    pub created_at: i64,
}
