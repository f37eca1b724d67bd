use serde::Serialize;

use super::entities::Subject;

// 科目响应
#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub subject: Subject,
}

// 科目列表响应
#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub total: usize,
    pub items: Vec<Subject>,
}
