use serde::{Deserialize, Serialize};

// 学生实体（注册号为自然主键）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub enrol_no: String,
    pub class_roll: i32,
    pub name: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub email: Option<String>,
    pub parent_email: Option<String>,
    pub year: i32,
    pub section: String,
}
