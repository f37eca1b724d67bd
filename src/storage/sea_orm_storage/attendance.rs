use super::SeaOrmStorage;
use crate::entity::attendance::{self, ActiveModel, Column, Entity as Attendance};
use crate::entity::students::Column as StudentColumn;
use crate::entity::subjects::Column as SubjectColumn;
use crate::errors::{AttendanceError, Result};
use crate::models::attendance::{
    entities::{ProfessorRecordView, StudentAttendanceView},
    requests::NewAttendanceRecord,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set, TransactionTrait,
};

fn into_active_model(req: NewAttendanceRecord) -> ActiveModel {
    ActiveModel {
        enrol_no: Set(req.enrol_no),
        class_date: Set(req.class_date),
        routine_id: Set(req.routine_id),
        period: Set(req.period),
        sub_id: Set(req.sub_id),
        prof_id: Set(req.prof_id),
        status: Set(req.status.to_string()),
        marked_by: Set(req.marked_by),
        remarks: Set(req.remarks),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 批量写入考勤记录
    ///
    /// 单事务：整批全部成功或全部失败。台账只追加，
    /// 同一（学生, 槽位, 日期）重复提交会产生重复行，这里不做去重。
    pub async fn insert_attendance_batch_impl(
        &self,
        rows: Vec<NewAttendanceRecord>,
    ) -> Result<usize> {
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
                AttendanceError::database_operation(format!("批量写入考勤记录失败: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(count)
    }

    /// 列出某教师录入的全部考勤记录（连接学生与科目描述字段）
    pub async fn list_attendance_by_professor_impl(
        &self,
        prof_id: i64,
    ) -> Result<Vec<ProfessorRecordView>> {
        let result = Attendance::find()
            .filter(Column::ProfId.eq(prof_id))
            .join(JoinType::InnerJoin, attendance::Relation::Students.def())
            .join(JoinType::LeftJoin, attendance::Relation::Subjects.def())
            .select_only()
            .column(Column::AttendanceId)
            .column(Column::EnrolNo)
            .column_as(StudentColumn::Name, "student_name")
            .column(Column::ClassDate)
            .column_as(SubjectColumn::SubName, "sub_name")
            .column(Column::Status)
            .column(Column::Remarks)
            .order_by_asc(Column::AttendanceId)
            .into_model::<ProfessorRecordView>()
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceError::database_operation(format!("查询考勤记录失败: {e}"))
            })?;

        Ok(result)
    }

    /// 列出某学生的全部考勤记录（连接科目名称，按上课日期倒序）
    pub async fn list_attendance_by_student_impl(
        &self,
        enrol_no: &str,
    ) -> Result<Vec<StudentAttendanceView>> {
        let result = Attendance::find()
            .filter(Column::EnrolNo.eq(enrol_no))
            .join(JoinType::LeftJoin, attendance::Relation::Subjects.def())
            .select_only()
            .column(Column::AttendanceId)
            .column(Column::ClassDate)
            .column_as(SubjectColumn::SubName, "sub_name")
            .column(Column::Status)
            .column(Column::Remarks)
            .order_by_desc(Column::ClassDate)
            .into_model::<StudentAttendanceView>()
            .all(&self.db)
            .await
            .map_err(|e| {
                AttendanceError::database_operation(format!("查询学生考勤失败: {e}"))
            })?;

        Ok(result)
    }
}
