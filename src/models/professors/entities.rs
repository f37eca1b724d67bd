use serde::{Deserialize, Serialize};

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professor {
    pub prof_id: i64,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub email: Option<String>,
}
