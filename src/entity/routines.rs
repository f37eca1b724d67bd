//! 课程表实体（周课表槽位）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "routine")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub routine_id: i64,
    pub day: String,
    pub timing: String,
    pub year: i32,
    pub section: String,
    pub sub_id: Option<i64>,
    pub prof_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubId",
        to = "super::subjects::Column::SubId"
    )]
    Subjects,
    #[sea_orm(
        belongs_to = "super::professors::Entity",
        from = "Column::ProfId",
        to = "super::professors::Column::ProfId"
    )]
    Professors,
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subjects.def()
    }
}

impl Related<super::professors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professors.def()
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
    pub fn into_routine(self) -> crate::models::routines::entities::Routine {
        use crate::models::routines::entities::{Day, Routine};

        Routine {
            routine_id: self.routine_id,
            day: self.day.parse::<Day>().unwrap_or(Day::Mon),
            timing: self.timing,
            year: self.year,
            section: self.section,
            sub_id: self.sub_id,
            prof_id: self.prof_id,
        }
    }
}
