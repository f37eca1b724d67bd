use serde::Serialize;

use super::entities::Student;

// 学生响应
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student: Student,
}

// 学生列表响应
#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub total: usize,
    pub items: Vec<Student>,
}
