//! 预导入模块，方便使用

pub use super::admins::{ActiveModel as AdminActiveModel, Entity as Admins, Model as AdminModel};
pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as Attendance, Model as AttendanceModel,
};
pub use super::attendance_alerts::{
    ActiveModel as AttendanceAlertActiveModel, Entity as AttendanceAlerts,
    Model as AttendanceAlertModel,
};
pub use super::professors::{
    ActiveModel as ProfessorActiveModel, Entity as Professors, Model as ProfessorModel,
};
pub use super::routines::{
    ActiveModel as RoutineActiveModel, Entity as Routines, Model as RoutineModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
