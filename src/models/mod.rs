pub mod alerts;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod imports;
pub mod professors;
pub mod routines;
pub mod students;
pub mod subjects;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 程序启动时间（用于运行时信息）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
