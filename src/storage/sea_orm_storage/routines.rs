use super::SeaOrmStorage;
use crate::entity::professors::Column as ProfessorColumn;
use crate::entity::routines::{self, ActiveModel, Column, Entity as Routines};
use crate::entity::subjects::Column as SubjectColumn;
use crate::errors::{AttendanceError, Result};
use crate::models::routines::{
    entities::{Routine, RoutineView},
    requests::NewRoutineRecord,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select, Set, TransactionTrait,
};

fn into_active_model(req: NewRoutineRecord) -> ActiveModel {
    ActiveModel {
        day: Set(req.day.to_string()),
        timing: Set(req.timing),
        year: Set(req.year),
        section: Set(req.section),
        sub_id: Set(req.sub_id),
        prof_id: Set(req.prof_id),
        ..Default::default()
    }
}

/// 课程表视图查询（连接科目与教师描述字段）
fn routine_view_select() -> Select<Routines> {
    Routines::find()
        .join(JoinType::LeftJoin, routines::Relation::Subjects.def())
        .join(JoinType::LeftJoin, routines::Relation::Professors.def())
        .select_only()
        .column(Column::RoutineId)
        .column(Column::Day)
        .column(Column::Timing)
        .column(Column::Year)
        .column(Column::Section)
        .column_as(SubjectColumn::SubCode, "sub_code")
        .column_as(SubjectColumn::SubName, "sub_name")
        .column_as(ProfessorColumn::Username, "prof_username")
        .column_as(ProfessorColumn::Name, "prof_name")
}

impl SeaOrmStorage {
    /// 创建课程表槽位（外键已由调用方解析）
    pub async fn create_routine_impl(&self, req: NewRoutineRecord) -> Result<Routine> {
        let result = into_active_model(req)
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("创建课程表失败: {e}")))?;

        Ok(result.into_routine())
    }

    /// 通过 ID 获取课程表槽位
    pub async fn get_routine_by_id_impl(&self, routine_id: i64) -> Result<Option<Routine>> {
        let result = Routines::find_by_id(routine_id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询课程表失败: {e}")))?;

        Ok(result.map(|m| m.into_routine()))
    }

    /// 通过 ID 获取课程表槽位视图
    pub async fn get_routine_view_by_id_impl(
        &self,
        routine_id: i64,
    ) -> Result<Option<RoutineView>> {
        let result = routine_view_select()
            .filter(Column::RoutineId.eq(routine_id))
            .into_model::<RoutineView>()
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询课程表失败: {e}")))?;

        Ok(result)
    }

    /// 列出全部课程表槽位
    pub async fn list_routines_impl(&self) -> Result<Vec<RoutineView>> {
        let result = routine_view_select()
            .order_by_asc(Column::RoutineId)
            .into_model::<RoutineView>()
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceError::database_operation(format!("查询课程表列表失败: {e}"))
            })?;

        Ok(result)
    }

    /// 列出某教师的课程表槽位
    pub async fn list_routines_by_professor_impl(&self, prof_id: i64) -> Result<Vec<RoutineView>> {
        let result = routine_view_select()
            .filter(Column::ProfId.eq(prof_id))
            .into_model::<RoutineView>()
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceError::database_operation(format!("查询教师课程表失败: {e}"))
            })?;

        Ok(result)
    }

    /// 列出某届某班的课程表槽位
    pub async fn list_routines_by_cohort_impl(
        &self,
        year: i32,
        section: &str,
    ) -> Result<Vec<RoutineView>> {
        let result = routine_view_select()
            .filter(Column::Year.eq(year))
            .filter(Column::Section.eq(section))
            .into_model::<RoutineView>()
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceError::database_operation(format!("查询班级课程表失败: {e}"))
            })?;

        Ok(result)
    }

    /// 删除课程表槽位
    pub async fn delete_routine_impl(&self, routine_id: i64) -> Result<bool> {
        let result = Routines::delete_by_id(routine_id)
            .exec(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("删除课程表失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量导入课程表槽位（单事务，全部成功或全部失败）
    pub async fn import_routines_impl(&self, rows: Vec<NewRoutineRecord>) -> Result<usize> {
        if rows.is_empty() {
            return Ok(0);
        }

        let count = rows.len();
        let models: Vec<ActiveModel> = rows.into_iter().map(into_active_model).collect();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("开启事务失败: {e}")))?;

        for model in models {
            model.insert(&txn).await.map_err(|e| {
                AttendanceError::database_operation(format!("批量写入课程表失败: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(count)
    }
}
