use serde::Serialize;

use super::entities::AlertView;

// 预警列表响应
#[derive(Debug, Serialize)]
pub struct AlertListResponse {
    pub total: usize,
    pub items: Vec<AlertView>,
}
