pub mod dashboard;
pub mod history;
pub mod mark;
pub mod records;
pub mod roster;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::MarkAttendanceRequest;
use crate::models::routines::entities::Routine;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取点名名单
    pub async fn roster(
        &self,
        routine_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        roster::roster(self, routine_id, request).await
    }

    // 批量点名
    pub async fn mark(
        &self,
        routine_id: i64,
        mark_data: MarkAttendanceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        mark::mark(self, routine_id, mark_data, request).await
    }

    // 获取当前教师录入的考勤记录
    pub async fn records(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        records::records(self, request).await
    }

    // 学生仪表盘（课表 + 分科目汇总）
    pub async fn dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        dashboard::dashboard(self, request).await
    }

    // 学生考勤明细
    pub async fn history(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        history::history(self, request).await
    }
}

/// 解析课程槽位并校验归属
///
/// 槽位必须存在且属于当前教师，否则统一报 "Invalid routine"。
pub(crate) async fn resolve_owned_routine(
    storage: &Arc<dyn Storage>,
    routine_id: i64,
    prof_id: i64,
) -> Result<Routine, HttpResponse> {
    match storage.get_routine_by_id(routine_id).await {
        Ok(Some(routine)) if routine.prof_id == Some(prof_id) => Ok(routine),
        Ok(_) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RoutineNotFound,
            "Invalid routine",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询课程表失败: {e}"),
            )),
        ),
    }
}
