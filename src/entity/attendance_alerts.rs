//! 考勤预警实体（本系统只读，由外部流程填充）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_alerts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub alert_id: i64,
    pub alert_type: String,
    pub percent: f64,
    pub class_date: Date,
    pub enrol_no: String,
    pub sub_id: Option<i64>,
    pub created_at: i64,
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

impl ActiveModelBehavior for ActiveModel {}
