use serde::Deserialize;

// 教师创建请求
#[derive(Debug, Deserialize)]
pub struct CreateProfessorRequest {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
}
