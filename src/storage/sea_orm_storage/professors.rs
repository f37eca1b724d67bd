use super::SeaOrmStorage;
use crate::entity::professors::{ActiveModel, Column, Entity as Professors};
use crate::errors::{AttendanceError, Result};
use crate::models::professors::{entities::Professor, requests::CreateProfessorRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

fn into_active_model(req: CreateProfessorRequest) -> ActiveModel {
    ActiveModel {
        username: Set(req.username),
        name: Set(req.name),
        // 调用方负责在进入存储层之前完成哈希
        password_hash: Set(req.password),
        email: Set(Some(req.email)),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_professor_impl(&self, req: CreateProfessorRequest) -> Result<Professor> {
        let result = into_active_model(req)
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("创建教师失败: {e}")))?;

        Ok(result.into_professor())
    }

    /// 通过 ID 获取教师
    pub async fn get_professor_by_id_impl(&self, prof_id: i64) -> Result<Option<Professor>> {
        let result = Professors::find_by_id(prof_id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_professor()))
    }

    /// 通过用户名获取教师
    pub async fn get_professor_by_username_impl(&self, username: &str) -> Result<Option<Professor>> {
        let result = Professors::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_professor()))
    }

    /// 列出全部教师
    pub async fn list_professors_impl(&self) -> Result<Vec<Professor>> {
        let result = Professors::find()
            .order_by_asc(Column::ProfId)
            .all(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_professor()).collect())
    }

    /// 删除教师
    pub async fn delete_professor_impl(&self, prof_id: i64) -> Result<bool> {
        let result = Professors::delete_by_id(prof_id)
            .exec(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量导入教师（单事务，全部成功或全部失败）
    pub async fn import_professors_impl(
        &self,
        rows: Vec<CreateProfessorRequest>,
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
                AttendanceError::database_operation(format!("批量写入教师失败: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(count)
    }
}
