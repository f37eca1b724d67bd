//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub enrol_no: String,
    pub class_roll: i32,
    pub name: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub parent_email: Option<String>,
    pub year: i32,
    pub section: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        crate::models::students::entities::Student {
            enrol_no: self.enrol_no,
            class_roll: self.class_roll,
            name: self.name,
            password_hash: self.password_hash,
            email: self.email,
            parent_email: self.parent_email,
            year: self.year,
            section: self.section,
        }
    }
}
