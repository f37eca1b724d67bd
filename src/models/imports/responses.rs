use serde::Serialize;

use super::entities::ImportTarget;

// 导入行错误
#[derive(Debug, Clone, Serialize)]
pub struct ImportRowError {
    pub row: usize,
    pub field: String,
    pub message: String,
}

// 导入结果（整个文件要么全部提交，要么一行都不写入）
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub target: ImportTarget,
    pub total: usize,
    pub inserted: usize,
}

// 导入失败详情
#[derive(Debug, Serialize)]
pub struct ImportErrorResponse {
    pub target: ImportTarget,
    pub errors: Vec<ImportRowError>,
}
