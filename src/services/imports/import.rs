//! 批量导入服务
//!
//! 策略：先完整校验整个文件（表头、每一行、自然键引用），
//! 任何一行有问题都在写入前拒绝整个文件；通过校验的文件
//! 在存储层以单事务提交。这与课程表手工添加的引用解析
//! 策略保持一致。

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ImportService;
use super::parse;
use crate::config::AppConfig;
use crate::models::imports::entities::ImportTarget;
use crate::models::imports::responses::{ImportErrorResponse, ImportResponse, ImportRowError};
use crate::models::professors::requests::CreateProfessorRequest;
use crate::models::routines::entities::Day;
use crate::models::routines::requests::NewRoutineRecord;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::validate::{
    validate_email, validate_enrol_no, validate_password, validate_username,
};

pub async fn import(
    service: &ImportService,
    target: ImportTarget,
    mut payload: Multipart,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    // 读取文件内容（带大小上限）
    let (file_bytes, file_name) =
        match parse::read_file_from_multipart(&mut payload, config.upload.max_size).await {
            Ok(result) => result,
            Err(e) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FileUploadFailed,
                    format!("文件读取失败: {e}"),
                )));
            }
        };

    // 扩展名校验
    let extension = Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default();

    if !config
        .upload
        .allowed_types
        .iter()
        .any(|t| t.eq_ignore_ascii_case(&extension))
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileTypeNotAllowed,
            "File type not allowed",
        )));
    }

    match target {
        ImportTarget::Students => import_students(&storage, target, &file_bytes).await,
        ImportTarget::Professors => import_professors(&storage, target, &file_bytes).await,
        ImportTarget::Subjects => import_subjects(&storage, target, &file_bytes).await,
        ImportTarget::Routine => import_routine(&storage, target, &file_bytes).await,
    }
}

fn parse_error_response(e: parse::ImportParseError) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(e.error_code(), e.message()))
}

fn too_many_rows_response(max_rows: usize) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ImportFileDataInvalid,
        format!("单次导入最多支持 {max_rows} 行"),
    ))
}

// 任何一行有问题都拒绝整个文件，不产生部分写入
fn row_errors_response(target: ImportTarget, errors: Vec<ImportRowError>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error(
        ErrorCode::ImportFileDataInvalid,
        ImportErrorResponse { target, errors },
        "导入失败，文件未提交",
    ))
}

fn import_failed_response(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::ImportFailed,
        format!("导入失败: {e}"),
    ))
}

fn success_response(target: ImportTarget, total: usize, inserted: usize) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(
        ImportResponse {
            target,
            total,
            inserted,
        },
        "导入完成",
    ))
}

/// 哈希一批学生行内的密码（argon2 较慢，放到阻塞线程池）
async fn hash_student_passwords(
    rows: Vec<(usize, CreateStudentRequest)>,
) -> Result<Vec<CreateStudentRequest>, String> {
    tokio::task::spawn_blocking(move || {
        rows.into_iter()
            .map(|(_, mut row)| match hash_password(&row.password) {
                Ok(hash) => {
                    row.password = hash;
                    Ok(row)
                }
                Err(e) => Err(e.to_string()),
            })
            .collect::<Result<Vec<_>, String>>()
    })
    .await
    .map_err(|e| e.to_string())?
}

/// 哈希一批教师行内的密码（argon2 较慢，放到阻塞线程池）
async fn hash_professor_passwords(
    rows: Vec<(usize, CreateProfessorRequest)>,
) -> Result<Vec<CreateProfessorRequest>, String> {
    tokio::task::spawn_blocking(move || {
        rows.into_iter()
            .map(|(_, mut row)| match hash_password(&row.password) {
                Ok(hash) => {
                    row.password = hash;
                    Ok(row)
                }
                Err(e) => Err(e.to_string()),
            })
            .collect::<Result<Vec<_>, String>>()
    })
    .await
    .map_err(|e| e.to_string())?
}

async fn import_students(
    storage: &Arc<dyn Storage>,
    target: ImportTarget,
    file_bytes: &[u8],
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let rows = match parse::parse_students(file_bytes) {
        Ok(rows) => rows,
        Err(e) => return Ok(parse_error_response(e)),
    };

    if rows.len() > config.upload.max_rows {
        return Ok(too_many_rows_response(config.upload.max_rows));
    }

    // 校验全部行
    let mut errors: Vec<ImportRowError> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (row_num, row) in &rows {
        let mut push = |field: &str, message: String| {
            errors.push(ImportRowError {
                row: *row_num,
                field: field.to_string(),
                message,
            });
        };

        if let Err(msg) = validate_enrol_no(&row.enrol_no) {
            push("enrol_no", msg.to_string());
        } else if !seen.insert(row.enrol_no.clone()) {
            push("enrol_no", "文件内注册号重复".to_string());
        }
        if let Err(msg) = validate_email(&row.email) {
            push("email", msg.to_string());
        }
        if let Err(msg) = validate_password(&row.password) {
            push("password", msg.to_string());
        }
        if row.name.is_empty() {
            push("name", "姓名不能为空".to_string());
        }
    }

    if !errors.is_empty() {
        return Ok(row_errors_response(target, errors));
    }

    let total = rows.len();
    let rows = match hash_student_passwords(rows).await {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("密码哈希失败: {e}"),
                )),
            );
        }
    };

    match storage.import_students(rows).await {
        Ok(inserted) => Ok(success_response(target, total, inserted)),
        Err(e) => Ok(import_failed_response(e)),
    }
}

async fn import_professors(
    storage: &Arc<dyn Storage>,
    target: ImportTarget,
    file_bytes: &[u8],
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let rows = match parse::parse_professors(file_bytes) {
        Ok(rows) => rows,
        Err(e) => return Ok(parse_error_response(e)),
    };

    if rows.len() > config.upload.max_rows {
        return Ok(too_many_rows_response(config.upload.max_rows));
    }

    let mut errors: Vec<ImportRowError> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (row_num, row) in &rows {
        let mut push = |field: &str, message: String| {
            errors.push(ImportRowError {
                row: *row_num,
                field: field.to_string(),
                message,
            });
        };

        if let Err(msg) = validate_username(&row.username) {
            push("username", msg.to_string());
        } else if !seen.insert(row.username.clone()) {
            push("username", "文件内用户名重复".to_string());
        }
        if let Err(msg) = validate_email(&row.email) {
            push("email", msg.to_string());
        }
        if let Err(msg) = validate_password(&row.password) {
            push("password", msg.to_string());
        }
        if row.name.is_empty() {
            push("name", "姓名不能为空".to_string());
        }
    }

    if !errors.is_empty() {
        return Ok(row_errors_response(target, errors));
    }

    let total = rows.len();
    let rows = match hash_professor_passwords(rows).await {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("密码哈希失败: {e}"),
                )),
            );
        }
    };

    match storage.import_professors(rows).await {
        Ok(inserted) => Ok(success_response(target, total, inserted)),
        Err(e) => Ok(import_failed_response(e)),
    }
}

async fn import_subjects(
    storage: &Arc<dyn Storage>,
    target: ImportTarget,
    file_bytes: &[u8],
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let rows = match parse::parse_subjects(file_bytes) {
        Ok(rows) => rows,
        Err(e) => return Ok(parse_error_response(e)),
    };

    if rows.len() > config.upload.max_rows {
        return Ok(too_many_rows_response(config.upload.max_rows));
    }

    let mut errors: Vec<ImportRowError> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (row_num, row) in &rows {
        let mut push = |field: &str, message: String| {
            errors.push(ImportRowError {
                row: *row_num,
                field: field.to_string(),
                message,
            });
        };

        if row.sub_code.is_empty() {
            push("sub_code", "科目代码不能为空".to_string());
        } else if !seen.insert(row.sub_code.clone()) {
            push("sub_code", "文件内科目代码重复".to_string());
        }
        if row.sub_name.is_empty() {
            push("sub_name", "科目名称不能为空".to_string());
        }
    }

    if !errors.is_empty() {
        return Ok(row_errors_response(target, errors));
    }

    let total = rows.len();
    match storage
        .import_subjects(rows.into_iter().map(|(_, row)| row).collect())
        .await
    {
        Ok(inserted) => Ok(success_response(target, total, inserted)),
        Err(e) => Ok(import_failed_response(e)),
    }
}

async fn import_routine(
    storage: &Arc<dyn Storage>,
    target: ImportTarget,
    file_bytes: &[u8],
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let rows = match parse::parse_routine(file_bytes) {
        Ok(rows) => rows,
        Err(e) => return Ok(parse_error_response(e)),
    };

    if rows.len() > config.upload.max_rows {
        return Ok(too_many_rows_response(config.upload.max_rows));
    }

    // 逐行解析自然键引用。与手工添加一致：
    // 任何一行的科目或教师未命中都拒绝整个文件，而不是写入空外键。
    let mut errors: Vec<ImportRowError> = Vec::new();
    let mut records: Vec<NewRoutineRecord> = Vec::new();

    for row in &rows {
        let day = match row.day.parse::<Day>() {
            Ok(day) => day,
            Err(_) => {
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "day".to_string(),
                    message: format!("无效的星期: '{}'", row.day),
                });
                continue;
            }
        };

        let subject = match storage.get_subject_by_code(&row.sub_code).await {
            Ok(Some(subject)) => subject,
            Ok(None) => {
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "sub_code".to_string(),
                    message: format!("科目代码不存在: '{}'", row.sub_code),
                });
                continue;
            }
            Err(e) => return Ok(import_failed_response(e)),
        };

        let professor = match storage.get_professor_by_username(&row.prof_username).await {
            Ok(Some(professor)) => professor,
            Ok(None) => {
                errors.push(ImportRowError {
                    row: row.row_num,
                    field: "prof_username".to_string(),
                    message: format!("教师用户名不存在: '{}'", row.prof_username),
                });
                continue;
            }
            Err(e) => return Ok(import_failed_response(e)),
        };

        records.push(NewRoutineRecord {
            day,
            timing: row.timing.clone(),
            year: row.year,
            section: row.section.clone(),
            sub_id: Some(subject.sub_id),
            prof_id: Some(professor.prof_id),
        });
    }

    if !errors.is_empty() {
        return Ok(row_errors_response(target, errors));
    }

    let total = records.len();
    match storage.import_routines(records).await {
        Ok(inserted) => Ok(success_response(target, total, inserted)),
        Err(e) => Ok(import_failed_response(e)),
    }
}
