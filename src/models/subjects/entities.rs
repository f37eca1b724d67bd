use serde::{Deserialize, Serialize};

// 科目实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub sub_id: i64,
    pub sub_code: String,
    pub sub_name: String,
    pub year: i32,
}
