/// 业务错误码
///
/// 0 表示成功；10xxx 为通用错误；20xxx 为认证授权；
/// 3xxxx 为各资源域；40xxx 为导入相关。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 10400,
    NotFound = 10404,
    InternalServerError = 10500,

    // 认证授权
    Unauthorized = 20401,
    AuthFailed = 20402,
    Forbidden = 20403,

    // 学生
    StudentNotFound = 30104,
    StudentAlreadyExists = 30109,
    StudentCreateFailed = 30110,
    StudentDeleteFailed = 30111,

    // 教师
    ProfessorNotFound = 30204,
    ProfessorAlreadyExists = 30209,
    ProfessorCreateFailed = 30210,
    ProfessorDeleteFailed = 30211,

    // 科目
    SubjectNotFound = 30304,
    SubjectAlreadyExists = 30309,
    SubjectCreateFailed = 30310,
    SubjectDeleteFailed = 30311,

    // 课程表
    RoutineNotFound = 30404,
    RoutineInvalidReference = 30405,
    RoutineCreateFailed = 30410,
    RoutineDeleteFailed = 30411,

    // 考勤
    AttendanceMarkFailed = 30510,

    // 导入
    FileUploadFailed = 40001,
    FileTypeNotAllowed = 40002,
    MultifileUploadNotAllowed = 40003,
    ImportTargetInvalid = 40004,
    ImportFileParseFailed = 40005,
    ImportFileMissingColumn = 40006,
    ImportFileDataInvalid = 40007,
    ImportFailed = 40008,
}
