use super::SeaOrmStorage;
use crate::entity::admins::{ActiveModel, Column, Entity as Admins};
use crate::errors::{AttendanceError, Result};
use crate::models::auth::entities::Admin;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建管理员（仅启动时的带外初始化调用）
    pub async fn create_admin_impl(&self, username: &str, password_hash: &str) -> Result<Admin> {
        let model = ActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("创建管理员失败: {e}")))?;

        Ok(result.into_admin())
    }

    /// 通过 ID 获取管理员
    pub async fn get_admin_by_id_impl(&self, admin_id: i64) -> Result<Option<Admin>> {
        let result = Admins::find_by_id(admin_id)
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 通过用户名获取管理员
    pub async fn get_admin_by_username_impl(&self, username: &str) -> Result<Option<Admin>> {
        let result = Admins::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询管理员失败: {e}")))?;

        Ok(result.map(|m| m.into_admin()))
    }

    /// 统计管理员数量
    pub async fn count_admins_impl(&self) -> Result<u64> {
        let count = Admins::find()
            .count(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("统计管理员数量失败: {e}")))?;

        Ok(count)
    }
}
