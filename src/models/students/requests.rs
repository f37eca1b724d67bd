use serde::Deserialize;

// 学生创建请求
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    pub enrol_no: String,
    pub class_roll: i32,
    pub name: String,
    pub password: String,
    pub email: String,
    pub parent_email: Option<String>,
    pub year: i32,
    pub section: String,
}
