//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "professors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub prof_id: i64,
    #[sea_orm(unique)]
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::routines::Entity")]
    Routines,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
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

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_professor(self) -> crate::models::professors::entities::Professor {
        crate::models::professors::entities::Professor {
            prof_id: self.prof_id,
            username: self.username,
            name: self.name,
            password_hash: self.password_hash,
            email: self.email,
        }
    }
}
