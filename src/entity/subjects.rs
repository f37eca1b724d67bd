//! 科目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub sub_id: i64,
    #[sea_orm(unique)]
    pub sub_code: String,
    pub sub_name: String,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::routines::Entity")]
    Routines,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
    #[sea_orm(has_many = "super::attendance_alerts::Entity")]
    AttendanceAlerts,
}

impl Related<super::routines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Routines.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl Related<super::attendance_alerts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttendanceAlerts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_subject(self) -> crate::models::subjects::entities::Subject {
        crate::models::subjects::entities::Subject {
            sub_id: self.sub_id,
            sub_code: self.sub_code,
            sub_name: self.sub_name,
            year: self.year,
        }
    }
}
