//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod admins;
mod alerts;
mod attendance;
mod professors;
mod routines;
mod students;
mod subjects;

use crate::config::AppConfig;
use crate::errors::{AttendanceError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| AttendanceError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| AttendanceError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AttendanceError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(AttendanceError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    alerts::entities::AlertView,
    attendance::{
        entities::{ProfessorRecordView, StudentAttendanceView},
        requests::NewAttendanceRecord,
    },
    auth::entities::Admin,
    professors::{entities::Professor, requests::CreateProfessorRequest},
    routines::{
        entities::{Routine, RoutineView},
        requests::NewRoutineRecord,
    },
    students::{entities::Student, requests::CreateStudentRequest},
    subjects::{entities::Subject, requests::CreateSubjectRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 管理员模块
    async fn create_admin(&self, username: &str, password_hash: &str) -> Result<Admin> {
        self.create_admin_impl(username, password_hash).await
    }

    async fn get_admin_by_id(&self, admin_id: i64) -> Result<Option<Admin>> {
        self.get_admin_by_id_impl(admin_id).await
    }

    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>> {
        self.get_admin_by_username_impl(username).await
    }

    async fn count_admins(&self) -> Result<u64> {
        self.count_admins_impl().await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_enrol_no(&self, enrol_no: &str) -> Result<Option<Student>> {
        self.get_student_by_enrol_no_impl(enrol_no).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn list_students_by_cohort(&self, year: i32, section: &str) -> Result<Vec<Student>> {
        self.list_students_by_cohort_impl(year, section).await
    }

    async fn delete_student(&self, enrol_no: &str) -> Result<bool> {
        self.delete_student_impl(enrol_no).await
    }

    async fn import_students(&self, rows: Vec<CreateStudentRequest>) -> Result<usize> {
        self.import_students_impl(rows).await
    }

    // 教师模块
    async fn create_professor(&self, professor: CreateProfessorRequest) -> Result<Professor> {
        self.create_professor_impl(professor).await
    }

    async fn get_professor_by_id(&self, prof_id: i64) -> Result<Option<Professor>> {
        self.get_professor_by_id_impl(prof_id).await
    }

    async fn get_professor_by_username(&self, username: &str) -> Result<Option<Professor>> {
        self.get_professor_by_username_impl(username).await
    }

    async fn list_professors(&self) -> Result<Vec<Professor>> {
        self.list_professors_impl().await
    }

    async fn delete_professor(&self, prof_id: i64) -> Result<bool> {
        self.delete_professor_impl(prof_id).await
    }

    async fn import_professors(&self, rows: Vec<CreateProfessorRequest>) -> Result<usize> {
        self.import_professors_impl(rows).await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_code(&self, sub_code: &str) -> Result<Option<Subject>> {
        self.get_subject_by_code_impl(sub_code).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn delete_subject(&self, sub_id: i64) -> Result<bool> {
        self.delete_subject_impl(sub_id).await
    }

    async fn import_subjects(&self, rows: Vec<CreateSubjectRequest>) -> Result<usize> {
        self.import_subjects_impl(rows).await
    }

    // 课程表模块
    async fn create_routine(&self, routine: NewRoutineRecord) -> Result<Routine> {
        self.create_routine_impl(routine).await
    }

    async fn get_routine_by_id(&self, routine_id: i64) -> Result<Option<Routine>> {
        self.get_routine_by_id_impl(routine_id).await
    }

    async fn get_routine_view_by_id(&self, routine_id: i64) -> Result<Option<RoutineView>> {
        self.get_routine_view_by_id_impl(routine_id).await
    }

    async fn list_routines(&self) -> Result<Vec<RoutineView>> {
        self.list_routines_impl().await
    }

    async fn list_routines_by_professor(&self, prof_id: i64) -> Result<Vec<RoutineView>> {
        self.list_routines_by_professor_impl(prof_id).await
    }

    async fn list_routines_by_cohort(&self, year: i32, section: &str) -> Result<Vec<RoutineView>> {
        self.list_routines_by_cohort_impl(year, section).await
    }

    async fn delete_routine(&self, routine_id: i64) -> Result<bool> {
        self.delete_routine_impl(routine_id).await
    }

    async fn import_routines(&self, rows: Vec<NewRoutineRecord>) -> Result<usize> {
        self.import_routines_impl(rows).await
    }

    // 考勤模块
    async fn insert_attendance_batch(&self, rows: Vec<NewAttendanceRecord>) -> Result<usize> {
        self.insert_attendance_batch_impl(rows).await
    }

    async fn list_attendance_by_professor(
        &self,
        prof_id: i64,
    ) -> Result<Vec<ProfessorRecordView>> {
        self.list_attendance_by_professor_impl(prof_id).await
    }

    async fn list_attendance_by_student(
        &self,
        enrol_no: &str,
    ) -> Result<Vec<StudentAttendanceView>> {
        self.list_attendance_by_student_impl(enrol_no).await
    }

    // 预警模块
    async fn list_alerts(&self) -> Result<Vec<AlertView>> {
        self.list_alerts_impl().await
    }
}

#[cfg(test)]
mod tests;
