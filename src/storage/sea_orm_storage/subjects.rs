use super::SeaOrmStorage;
use crate::entity::subjects::{ActiveModel, Column, Entity as Subjects};
use crate::errors::{AttendanceError, Result};
use crate::models::subjects::{entities::Subject, requests::CreateSubjectRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

fn into_active_model(req: CreateSubjectRequest) -> ActiveModel {
    ActiveModel {
        sub_code: Set(req.sub_code),
        sub_name: Set(req.sub_name),
        year: Set(req.year),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 创建科目
    pub async fn create_subject_impl(&self, req: CreateSubjectRequest) -> Result<Subject> {
        let result = into_active_model(req)
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("创建科目失败: {e}")))?;

        Ok(result.into_subject())
    }

    /// 通过科目代码获取科目
    pub async fn get_subject_by_code_impl(&self, sub_code: &str) -> Result<Option<Subject>> {
        let result = Subjects::find()
            .filter(Column::SubCode.eq(sub_code))
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 列出全部科目
    pub async fn list_subjects_impl(&self) -> Result<Vec<Subject>> {
        let result = Subjects::find()
            .order_by_asc(Column::SubCode)
            .all(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 删除科目
    pub async fn delete_subject_impl(&self, sub_id: i64) -> Result<bool> {
        let result = Subjects::delete_by_id(sub_id)
            .exec(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("删除科目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量导入科目（单事务，全部成功或全部失败）
    pub async fn import_subjects_impl(&self, rows: Vec<CreateSubjectRequest>) -> Result<usize> {
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
                AttendanceError::database_operation(format!("批量写入科目失败: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(count)
    }
}
