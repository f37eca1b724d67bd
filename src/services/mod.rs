pub mod alerts;
pub mod attendance;
pub mod auth;
pub mod imports;
pub mod professors;
pub mod routines;
pub mod students;
pub mod subjects;

pub use alerts::AlertService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use imports::ImportService;
pub use professors::ProfessorService;
pub use routines::RoutineService;
pub use students::StudentService;
pub use subjects::SubjectService;
