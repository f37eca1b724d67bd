use super::SeaOrmStorage;
use crate::entity::attendance_alerts::{self, Column, Entity as AttendanceAlerts};
use crate::entity::students::Column as StudentColumn;
use crate::entity::subjects::Column as SubjectColumn;
use crate::errors::{AttendanceError, Result};
use crate::models::alerts::entities::AlertView;
use sea_orm::{EntityTrait, JoinType, QueryOrder, QuerySelect, RelationTrait};

impl SeaOrmStorage {
    /// 列出全部考勤预警（连接学生与科目，按创建时间倒序）
    ///
    /// 预警行由外部流程写入，本系统只读取。
    pub async fn list_alerts_impl(&self) -> Result<Vec<AlertView>> {
        let result = AttendanceAlerts::find()
            .join(
                JoinType::InnerJoin,
                attendance_alerts::Relation::Students.def(),
            )
            .join(
                JoinType::LeftJoin,
                attendance_alerts::Relation::Subjects.def(),
            )
            .select_only()
            .column(Column::AlertId)
            .column(Column::AlertType)
            .column(Column::Percent)
            .column(Column::ClassDate)
            .column(Column::EnrolNo)
            .column_as(StudentColumn::Name, "student_name")
            .column_as(SubjectColumn::SubName, "sub_name")
            .column(Column::CreatedAt)
            .order_by_desc(Column::CreatedAt)
            .into_model::<AlertView>()
            .all(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询预警列表失败: {e}")))?;

        Ok(result)
    }
}
