use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{AttendanceError, Result};
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

fn into_active_model(req: CreateStudentRequest) -> ActiveModel {
    ActiveModel {
        enrol_no: Set(req.enrol_no),
        class_roll: Set(req.class_roll),
        name: Set(req.name),
        // 调用方负责在进入存储层之前完成哈希
        password_hash: Set(req.password),
        email: Set(Some(req.email)),
        parent_email: Set(req.parent_email),
        year: Set(req.year),
        section: Set(req.section),
    }
}

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let result = into_active_model(req)
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过注册号获取学生
    pub async fn get_student_by_enrol_no_impl(&self, enrol_no: &str) -> Result<Option<Student>> {
        let result = Students::find_by_id(enrol_no.to_string())
            .one(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let result = Students::find()
            .order_by_asc(Column::EnrolNo)
            .all(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }

    /// 列出某届某班的全部学生（点名名单）
    pub async fn list_students_by_cohort_impl(
        &self,
        year: i32,
        section: &str,
    ) -> Result<Vec<Student>> {
        let result = Students::find()
            .filter(Column::Year.eq(year))
            .filter(Column::Section.eq(section))
            .order_by_asc(Column::ClassRoll)
            .all(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询点名名单失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_student()).collect())
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, enrol_no: &str) -> Result<bool> {
        let result = Students::delete_by_id(enrol_no.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 批量导入学生（单事务，全部成功或全部失败）
    pub async fn import_students_impl(&self, rows: Vec<CreateStudentRequest>) -> Result<usize> {
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
                AttendanceError::database_operation(format!("批量写入学生失败: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| AttendanceError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(count)
    }
}
