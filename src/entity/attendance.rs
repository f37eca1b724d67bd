//! 考勤台账实体（只追加）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub attendance_id: i64,
    pub enrol_no: String,
    pub class_date: Date,
    pub routine_id: Option<i64>,
    pub period: Option<String>,
    pub sub_id: Option<i64>,
    pub prof_id: Option<i64>,
    pub status: String,
    pub marked_by: Option<i64>,
    pub remarks: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::EnrolNo",
        to = "super::students::Column::EnrolNo"
    )]
    Students,
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
    #[sea_orm(
        belongs_to = "super::routines::Entity",
        from = "Column::RoutineId",
        to = "super::routines::Column::RoutineId"
    )]
    Routines,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
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

impl Related<super::routines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Routines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
