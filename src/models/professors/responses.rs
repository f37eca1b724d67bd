use serde::Serialize;

use super::entities::Professor;

// 教师响应
#[derive(Debug, Serialize)]
pub struct ProfessorResponse {
    pub professor: Professor,
}

// 教师列表响应
#[derive(Debug, Serialize)]
pub struct ProfessorListResponse {
    pub total: usize,
    pub items: Vec<Professor>,
}
