pub mod alerts;

pub mod attendance;

pub mod auth;

pub mod imports;

pub mod professors;

pub mod routines;

pub mod students;

pub mod subjects;

pub use alerts::configure_alert_routes;
pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use imports::configure_import_routes;
pub use professors::configure_professor_routes;
pub use routines::configure_routine_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
