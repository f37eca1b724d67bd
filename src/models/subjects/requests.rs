use serde::Deserialize;

// 科目创建请求
#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub sub_code: String,
    pub sub_name: String,
    pub year: i32,
}
