use serde::Deserialize;

use super::entities::Day;

// 课程表槽位创建请求
//
// 科目与教师通过自然键（科目代码、教师用户名）引用，
// 创建时解析为外键；任一解析失败则整个操作被拒绝。
#[derive(Debug, Deserialize)]
pub struct CreateRoutineRequest {
    pub day: Day,
    pub timing: String,
    pub year: i32,
    pub section: String,
    pub sub_code: String,
    pub prof_username: String,
}

// 课程表槽位写入记录（用于存储层，外键已解析）
#[derive(Debug, Clone)]
pub struct NewRoutineRecord {
    pub day: Day,
    pub timing: String,
    pub year: i32,
    pub section: String,
    pub sub_id: Option<i64>,
    pub prof_id: Option<i64>,
}
