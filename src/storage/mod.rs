use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 管理员方法（仅带外初始化使用，无任何管理路由）
    // 创建管理员
    async fn create_admin(&self, username: &str, password_hash: &str) -> Result<Admin>;
    // 通过ID获取管理员
    async fn get_admin_by_id(&self, admin_id: i64) -> Result<Option<Admin>>;
    // 通过用户名获取管理员
    async fn get_admin_by_username(&self, username: &str) -> Result<Option<Admin>>;
    // 统计管理员数量
    async fn count_admins(&self) -> Result<u64>;

    /// 学生管理方法
    // 创建学生（password 字段需已哈希）
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过注册号获取学生
    async fn get_student_by_enrol_no(&self, enrol_no: &str) -> Result<Option<Student>>;
    // 列出全部学生
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 列出某届某班的全部学生（点名名单）
    async fn list_students_by_cohort(&self, year: i32, section: &str) -> Result<Vec<Student>>;
    // 删除学生
    async fn delete_student(&self, enrol_no: &str) -> Result<bool>;
    // 批量导入学生（单事务）
    async fn import_students(&self, rows: Vec<CreateStudentRequest>) -> Result<usize>;

    /// 教师管理方法
    // 创建教师（password 字段需已哈希）
    async fn create_professor(&self, professor: CreateProfessorRequest) -> Result<Professor>;
    // 通过ID获取教师
    async fn get_professor_by_id(&self, prof_id: i64) -> Result<Option<Professor>>;
    // 通过用户名获取教师
    async fn get_professor_by_username(&self, username: &str) -> Result<Option<Professor>>;
    // 列出全部教师
    async fn list_professors(&self) -> Result<Vec<Professor>>;
    // 删除教师
    async fn delete_professor(&self, prof_id: i64) -> Result<bool>;
    // 批量导入教师（单事务）
    async fn import_professors(&self, rows: Vec<CreateProfessorRequest>) -> Result<usize>;

    /// 科目管理方法
    // 创建科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 通过科目代码获取科目
    async fn get_subject_by_code(&self, sub_code: &str) -> Result<Option<Subject>>;
    // 列出全部科目
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    // 删除科目
    async fn delete_subject(&self, sub_id: i64) -> Result<bool>;
    // 批量导入科目（单事务）
    async fn import_subjects(&self, rows: Vec<CreateSubjectRequest>) -> Result<usize>;

    /// 课程表管理方法
    // 创建课程表槽位（外键已由调用方解析）
    async fn create_routine(&self, routine: NewRoutineRecord) -> Result<Routine>;
    // 通过ID获取课程表槽位
    async fn get_routine_by_id(&self, routine_id: i64) -> Result<Option<Routine>>;
    // 通过ID获取课程表槽位视图（含科目/教师描述字段）
    async fn get_routine_view_by_id(&self, routine_id: i64) -> Result<Option<RoutineView>>;
    // 列出全部课程表槽位
    async fn list_routines(&self) -> Result<Vec<RoutineView>>;
    // 列出某教师的课程表槽位
    async fn list_routines_by_professor(&self, prof_id: i64) -> Result<Vec<RoutineView>>;
    // 列出某届某班的课程表槽位
    async fn list_routines_by_cohort(&self, year: i32, section: &str) -> Result<Vec<RoutineView>>;
    // 删除课程表槽位
    async fn delete_routine(&self, routine_id: i64) -> Result<bool>;
    // 批量导入课程表槽位（单事务）
    async fn import_routines(&self, rows: Vec<NewRoutineRecord>) -> Result<usize>;

    /// 考勤台账方法
    // 批量写入考勤记录（单事务，全部成功或全部失败；只追加，不去重）
    async fn insert_attendance_batch(&self, rows: Vec<NewAttendanceRecord>) -> Result<usize>;
    // 列出某教师录入的全部考勤记录（连接学生与科目）
    async fn list_attendance_by_professor(&self, prof_id: i64)
    -> Result<Vec<ProfessorRecordView>>;
    // 列出某学生的全部考勤记录（连接科目，按上课日期倒序）
    async fn list_attendance_by_student(&self, enrol_no: &str)
    -> Result<Vec<StudentAttendanceView>>;

    /// 预警方法（只读）
    // 列出全部考勤预警（连接学生与科目，按创建时间倒序）
    async fn list_alerts(&self) -> Result<Vec<AlertView>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
