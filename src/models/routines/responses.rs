use serde::Serialize;

use super::entities::RoutineView;

// 课程表槽位响应
#[derive(Debug, Serialize)]
pub struct RoutineResponse {
    pub routine: RoutineView,
}

// 课程表列表响应
#[derive(Debug, Serialize)]
pub struct RoutineListResponse {
    pub total: usize,
    pub items: Vec<RoutineView>,
}
