use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建管理员表
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::AdminId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Admins::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admins::PasswordHash).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建学生表（注册号为自然主键）
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::EnrolNo)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::ClassRoll).integer().not_null())
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().null())
                    .col(ColumnDef::new(Students::ParentEmail).string().null())
                    .col(ColumnDef::new(Students::Year).integer().not_null())
                    .col(ColumnDef::new(Students::Section).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::ProfId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Professors::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Professors::Name).string().not_null())
                    .col(ColumnDef::new(Professors::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Professors::Email).string().null())
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::SubId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subjects::SubCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subjects::SubName).string().not_null())
                    .col(ColumnDef::new(Subjects::Year).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表（周课表槽位）
        manager
            .create_table(
                Table::create()
                    .table(Routine::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Routine::RoutineId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Routine::Day).string().not_null())
                    .col(ColumnDef::new(Routine::Timing).string().not_null())
                    .col(ColumnDef::new(Routine::Year).integer().not_null())
                    .col(ColumnDef::new(Routine::Section).string().not_null())
                    .col(ColumnDef::new(Routine::SubId).big_integer().null())
                    .col(ColumnDef::new(Routine::ProfId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Routine::Table, Routine::SubId)
                            .to(Subjects::Table, Subjects::SubId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Routine::Table, Routine::ProfId)
                            .to(Professors::Table, Professors::ProfId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤台账表（只追加）
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::AttendanceId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendance::EnrolNo).string().not_null())
                    .col(ColumnDef::new(Attendance::ClassDate).date().not_null())
                    .col(ColumnDef::new(Attendance::RoutineId).big_integer().null())
                    .col(ColumnDef::new(Attendance::Period).string().null())
                    .col(ColumnDef::new(Attendance::SubId).big_integer().null())
                    .col(ColumnDef::new(Attendance::ProfId).big_integer().null())
                    .col(
                        ColumnDef::new(Attendance::Status)
                            .string()
                            .not_null()
                            .default("present"),
                    )
                    .col(ColumnDef::new(Attendance::MarkedBy).big_integer().null())
                    .col(ColumnDef::new(Attendance::Remarks).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendance::Table, Attendance::EnrolNo)
                            .to(Students::Table, Students::EnrolNo)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendance::Table, Attendance::RoutineId)
                            .to(Routine::Table, Routine::RoutineId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendance::Table, Attendance::SubId)
                            .to(Subjects::Table, Subjects::SubId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attendance::Table, Attendance::ProfId)
                            .to(Professors::Table, Professors::ProfId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤预警表（本系统只读，由外部流程填充）
        manager
            .create_table(
                Table::create()
                    .table(AttendanceAlerts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceAlerts::AlertId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AttendanceAlerts::AlertType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AttendanceAlerts::Percent).double().not_null())
                    .col(ColumnDef::new(AttendanceAlerts::ClassDate).date().not_null())
                    .col(ColumnDef::new(AttendanceAlerts::EnrolNo).string().not_null())
                    .col(ColumnDef::new(AttendanceAlerts::SubId).big_integer().null())
                    .col(
                        ColumnDef::new(AttendanceAlerts::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceAlerts::Table, AttendanceAlerts::EnrolNo)
                            .to(Students::Table, Students::EnrolNo)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AttendanceAlerts::Table, AttendanceAlerts::SubId)
                            .to(Subjects::Table, Subjects::SubId)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤统计表（预留扩展点，当前没有任何操作读写）
        manager
            .create_table(
                Table::create()
                    .table(AttendanceStats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AttendanceStats::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AttendanceStats::EnrolNo).string().null())
                    .col(ColumnDef::new(AttendanceStats::SubId).big_integer().null())
                    .col(
                        ColumnDef::new(AttendanceStats::TotalClasses)
                            .integer()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AttendanceStats::AttendedClasses)
                            .integer()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(AttendanceStats::Percentage)
                            .double()
                            .default(0.0),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生-科目关联表（预留，未被任何操作使用）
        manager
            .create_table(
                Table::create()
                    .table(StudentSubjects::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(StudentSubjects::EnrolNo).string().not_null())
                    .col(
                        ColumnDef::new(StudentSubjects::SubId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(StudentSubjects::EnrolNo)
                            .col(StudentSubjects::SubId),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建教师-科目关联表（预留，未被任何操作使用）
        manager
            .create_table(
                Table::create()
                    .table(ProfessorSubjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfessorSubjects::ProfId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProfessorSubjects::SubId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ProfessorSubjects::ProfId)
                            .col(ProfessorSubjects::SubId),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 学生表索引（按届别与班级查找点名名单）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_students_year_section")
                    .table(Students::Table)
                    .col(Students::Year)
                    .col(Students::Section)
                    .to_owned(),
            )
            .await?;

        // 课程表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_routine_prof_id")
                    .table(Routine::Table)
                    .col(Routine::ProfId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_routine_year_section")
                    .table(Routine::Table)
                    .col(Routine::Year)
                    .col(Routine::Section)
                    .to_owned(),
            )
            .await?;

        // 考勤表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_enrol_no_sub_id")
                    .table(Attendance::Table)
                    .col(Attendance::EnrolNo)
                    .col(Attendance::SubId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_prof_id")
                    .table(Attendance::Table)
                    .col(Attendance::ProfId)
                    .to_owned(),
            )
            .await?;

        // 预警表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attendance_alerts_created_at")
                    .table(AttendanceAlerts::Table)
                    .col(AttendanceAlerts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(ProfessorSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudentSubjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceStats::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AttendanceAlerts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Routine::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Admins {
    #[sea_orm(iden = "admins")]
    Table,
    AdminId,
    Username,
    PasswordHash,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    EnrolNo,
    ClassRoll,
    Name,
    PasswordHash,
    Email,
    ParentEmail,
    Year,
    Section,
}

#[derive(DeriveIden)]
enum Professors {
    #[sea_orm(iden = "professors")]
    Table,
    ProfId,
    Username,
    Name,
    PasswordHash,
    Email,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    SubId,
    SubCode,
    SubName,
    Year,
}

#[derive(DeriveIden)]
enum Routine {
    #[sea_orm(iden = "routine")]
    Table,
    RoutineId,
    Day,
    Timing,
    Year,
    Section,
    SubId,
    ProfId,
}

#[derive(DeriveIden)]
enum Attendance {
    #[sea_orm(iden = "attendance")]
    Table,
    AttendanceId,
    EnrolNo,
    ClassDate,
    RoutineId,
    Period,
    SubId,
    ProfId,
    Status,
    MarkedBy,
    Remarks,
}

#[derive(DeriveIden)]
enum AttendanceAlerts {
    #[sea_orm(iden = "attendance_alerts")]
    Table,
    AlertId,
    AlertType,
    Percent,
    ClassDate,
    EnrolNo,
    SubId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AttendanceStats {
    #[sea_orm(iden = "attendance_stats")]
    Table,
    Id,
    EnrolNo,
    SubId,
    TotalClasses,
    AttendedClasses,
    Percentage,
}

#[derive(DeriveIden)]
enum StudentSubjects {
    #[sea_orm(iden = "student_subjects")]
    Table,
    EnrolNo,
    SubId,
}

#[derive(DeriveIden)]
enum ProfessorSubjects {
    #[sea_orm(iden = "professor_subjects")]
    Table,
    ProfId,
    SubId,
}
