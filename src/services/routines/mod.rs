pub mod create;
pub mod delete;
pub mod list;
pub mod mine;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::routines::entities::{Day, RoutineView};
use crate::models::routines::requests::CreateRoutineRequest;
use crate::storage::Storage;

pub struct RoutineService {
    storage: Option<Arc<dyn Storage>>,
}

impl RoutineService {
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

    // 获取课程表列表
    pub async fn list_routines(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_routines(self, request).await
    }

    // 创建课程表槽位
    pub async fn create_routine(
        &self,
        routine_data: CreateRoutineRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_routine(self, routine_data, request).await
    }

    // 删除课程表槽位
    pub async fn delete_routine(
        &self,
        routine_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_routine(self, routine_id, request).await
    }

    // 获取当前教师自己的课程表
    pub async fn my_routines(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        mine::my_routines(self, request).await
    }
}

/// 按星期再按时间段排序课程表视图
///
/// 星期在库中以字符串存储，字典序不等于星期顺序，所以在这里排。
pub(crate) fn sort_by_day_then_timing(routines: &mut [RoutineView]) {
    routines.sort_by(|a, b| {
        Day::order_of(&a.day)
            .cmp(&Day::order_of(&b.day))
            .then_with(|| a.timing.cmp(&b.timing))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(day: &str, timing: &str) -> RoutineView {
        RoutineView {
            routine_id: 0,
            day: day.to_string(),
            timing: timing.to_string(),
            year: 2,
            section: "A".to_string(),
            sub_code: None,
            sub_name: None,
            prof_username: None,
            prof_name: None,
        }
    }

    #[test]
    fn test_sorts_by_day_order_not_lexicographically() {
        let mut routines = vec![view("Wed", "9-10"), view("Fri", "9-10"), view("Mon", "9-10")];
        sort_by_day_then_timing(&mut routines);
        let days: Vec<_> = routines.iter().map(|r| r.day.as_str()).collect();
        // 字典序会给出 Fri < Mon < Wed，这里必须是星期顺序
        assert_eq!(days, vec!["Mon", "Wed", "Fri"]);
    }

    #[test]
    fn test_sorts_by_timing_within_a_day() {
        let mut routines = vec![view("Mon", "11-12"), view("Mon", "09-10")];
        sort_by_day_then_timing(&mut routines);
        let timings: Vec<_> = routines.iter().map(|r| r.timing.as_str()).collect();
        assert_eq!(timings, vec!["09-10", "11-12"]);
    }
}
