//! 导入文件解析
//!
//! 每种导入目标有固定的表头契约。缺少必需列或任何一行无法解析
//! 都会使整个文件被拒绝，在任何写入发生之前。

use std::collections::HashMap;
use std::io::Cursor;

use actix_multipart::Multipart;
use futures_util::StreamExt;

use crate::models::ErrorCode;
use crate::models::professors::requests::CreateProfessorRequest;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::subjects::requests::CreateSubjectRequest;

/// 导入解析错误
#[derive(Debug)]
pub(crate) enum ImportParseError {
    MissingColumn(String),
    ParseFailed(String),
    EmptyFile,
}

impl ImportParseError {
    pub(crate) fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingColumn(_) => ErrorCode::ImportFileMissingColumn,
            Self::ParseFailed(_) => ErrorCode::ImportFileParseFailed,
            Self::EmptyFile => ErrorCode::ImportFileDataInvalid,
        }
    }

    pub(crate) fn message(&self) -> String {
        match self {
            Self::MissingColumn(col) => format!("缺少必需列: {col}"),
            Self::ParseFailed(msg) => msg.clone(),
            Self::EmptyFile => "文件中没有数据".to_string(),
        }
    }
}

/// 课程表导入行（自然键引用在解析之后、写入之前统一解析）
#[derive(Debug, Clone)]
pub(crate) struct RoutineImportRow {
    pub row_num: usize,
    pub day: String,
    pub timing: String,
    pub year: i32,
    pub section: String,
    pub sub_code: String,
    pub prof_username: String,
}

/// 从 multipart 中读取文件内容，同时施加大小上限
pub(crate) async fn read_file_from_multipart(
    payload: &mut Multipart,
    max_size: usize,
) -> Result<(Vec<u8>, String), String> {
    let mut file_bytes = Vec::new();
    let mut file_name = String::new();
    let mut file_seen = false;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| format!("读取字段失败: {e}"))?;

        if field.name().map(|n| n == "file").unwrap_or(false) {
            if file_seen {
                return Err("一次只能上传一个文件".to_string());
            }
            file_seen = true;

            // 获取文件名
            if let Some(content_disposition) = field.content_disposition() {
                file_name = content_disposition
                    .get_filename()
                    .unwrap_or("upload.csv")
                    .to_string();
            }

            // 读取内容
            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| format!("读取数据失败: {e}"))?;
                if file_bytes.len() + data.len() > max_size {
                    return Err(format!("文件超出大小限制 ({max_size} 字节)"));
                }
                file_bytes.extend_from_slice(&data);
            }
        }
    }

    if file_bytes.is_empty() {
        return Err("未找到文件字段".to_string());
    }

    Ok((file_bytes, file_name))
}

type HeaderMap = HashMap<String, usize>;

fn csv_reader(data: &[u8]) -> csv::Reader<Cursor<&[u8]>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(data))
}

fn header_map(rdr: &mut csv::Reader<Cursor<&[u8]>>) -> Result<HeaderMap, ImportParseError> {
    let headers = rdr
        .headers()
        .map_err(|e| ImportParseError::ParseFailed(format!("读取表头失败: {e}")))?;
    Ok(headers
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_lowercase(), i))
        .collect())
}

fn require(headers: &HeaderMap, column: &str) -> Result<usize, ImportParseError> {
    headers
        .get(column)
        .copied()
        .ok_or_else(|| ImportParseError::MissingColumn(column.to_string()))
}

fn cell(record: &csv::StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").trim().to_string()
}

fn parse_int(value: &str, column: &str, row_num: usize) -> Result<i32, ImportParseError> {
    value.parse::<i32>().map_err(|_| {
        ImportParseError::ParseFailed(format!("第 {row_num} 行的 {column} 不是有效整数: '{value}'"))
    })
}

/// 解析学生导入文件
///
/// 必需列: enrol_no, class_roll, name, password, email, year, section
/// 可选列: parent_email
pub(crate) fn parse_students(
    data: &[u8],
) -> Result<Vec<(usize, CreateStudentRequest)>, ImportParseError> {
    let mut rdr = csv_reader(data);
    let headers = header_map(&mut rdr)?;

    let enrol_no_idx = require(&headers, "enrol_no")?;
    let class_roll_idx = require(&headers, "class_roll")?;
    let name_idx = require(&headers, "name")?;
    let password_idx = require(&headers, "password")?;
    let email_idx = require(&headers, "email")?;
    let year_idx = require(&headers, "year")?;
    let section_idx = require(&headers, "section")?;
    let parent_email_idx = headers.get("parent_email").copied();

    let mut rows = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let row_num = i + 2; // 1-based, skip header
        let record = result
            .map_err(|e| ImportParseError::ParseFailed(format!("第 {row_num} 行解析失败: {e}")))?;

        rows.push((
            row_num,
            CreateStudentRequest {
                enrol_no: cell(&record, enrol_no_idx),
                class_roll: parse_int(&cell(&record, class_roll_idx), "class_roll", row_num)?,
                name: cell(&record, name_idx),
                password: cell(&record, password_idx),
                email: cell(&record, email_idx),
                parent_email: parent_email_idx
                    .map(|idx| cell(&record, idx))
                    .filter(|s| !s.is_empty()),
                year: parse_int(&cell(&record, year_idx), "year", row_num)?,
                section: cell(&record, section_idx),
            },
        ));
    }

    if rows.is_empty() {
        return Err(ImportParseError::EmptyFile);
    }

    Ok(rows)
}

/// 解析教师导入文件
///
/// 必需列: username, name, password, email
pub(crate) fn parse_professors(
    data: &[u8],
) -> Result<Vec<(usize, CreateProfessorRequest)>, ImportParseError> {
    let mut rdr = csv_reader(data);
    let headers = header_map(&mut rdr)?;

    let username_idx = require(&headers, "username")?;
    let name_idx = require(&headers, "name")?;
    let password_idx = require(&headers, "password")?;
    let email_idx = require(&headers, "email")?;

    let mut rows = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let row_num = i + 2;
        let record = result
            .map_err(|e| ImportParseError::ParseFailed(format!("第 {row_num} 行解析失败: {e}")))?;

        rows.push((
            row_num,
            CreateProfessorRequest {
                username: cell(&record, username_idx),
                name: cell(&record, name_idx),
                password: cell(&record, password_idx),
                email: cell(&record, email_idx),
            },
        ));
    }

    if rows.is_empty() {
        return Err(ImportParseError::EmptyFile);
    }

    Ok(rows)
}

/// 解析科目导入文件
///
/// 必需列: sub_code, sub_name, year
pub(crate) fn parse_subjects(
    data: &[u8],
) -> Result<Vec<(usize, CreateSubjectRequest)>, ImportParseError> {
    let mut rdr = csv_reader(data);
    let headers = header_map(&mut rdr)?;

    let sub_code_idx = require(&headers, "sub_code")?;
    let sub_name_idx = require(&headers, "sub_name")?;
    let year_idx = require(&headers, "year")?;

    let mut rows = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let row_num = i + 2;
        let record = result
            .map_err(|e| ImportParseError::ParseFailed(format!("第 {row_num} 行解析失败: {e}")))?;

        rows.push((
            row_num,
            CreateSubjectRequest {
                sub_code: cell(&record, sub_code_idx),
                sub_name: cell(&record, sub_name_idx),
                year: parse_int(&cell(&record, year_idx), "year", row_num)?,
            },
        ));
    }

    if rows.is_empty() {
        return Err(ImportParseError::EmptyFile);
    }

    Ok(rows)
}

/// 解析课程表导入文件
///
/// 必需列: day, timing, year, section, sub_code, prof_username
pub(crate) fn parse_routine(data: &[u8]) -> Result<Vec<RoutineImportRow>, ImportParseError> {
    let mut rdr = csv_reader(data);
    let headers = header_map(&mut rdr)?;

    let day_idx = require(&headers, "day")?;
    let timing_idx = require(&headers, "timing")?;
    let year_idx = require(&headers, "year")?;
    let section_idx = require(&headers, "section")?;
    let sub_code_idx = require(&headers, "sub_code")?;
    let prof_username_idx = require(&headers, "prof_username")?;

    let mut rows = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let row_num = i + 2;
        let record = result
            .map_err(|e| ImportParseError::ParseFailed(format!("第 {row_num} 行解析失败: {e}")))?;

        rows.push(RoutineImportRow {
            row_num,
            day: cell(&record, day_idx),
            timing: cell(&record, timing_idx),
            year: parse_int(&cell(&record, year_idx), "year", row_num)?,
            section: cell(&record, section_idx),
            sub_code: cell(&record, sub_code_idx),
            prof_username: cell(&record, prof_username_idx),
        });
    }

    if rows.is_empty() {
        return Err(ImportParseError::EmptyFile);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_students_with_optional_parent_email() {
        let data = b"enrol_no,class_roll,name,password,email,parent_email,year,section\n\
                     E001,1,Alice,pw1,alice@example.edu,mum@example.edu,2,A\n\
                     E002,2,Bob,pw2,bob@example.edu,,2,A\n";
        let rows = parse_students(data).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, 2);
        assert_eq!(rows[0].1.enrol_no, "E001");
        assert_eq!(rows[0].1.parent_email.as_deref(), Some("mum@example.edu"));
        assert_eq!(rows[1].1.parent_email, None);
    }

    #[test]
    fn test_parse_students_without_parent_email_column() {
        let data = b"enrol_no,class_roll,name,password,email,year,section\n\
                     E001,1,Alice,pw1,alice@example.edu,2,A\n";
        let rows = parse_students(data).unwrap();
        assert_eq!(rows[0].1.parent_email, None);
    }

    #[test]
    fn test_missing_required_column_rejects_whole_file() {
        // 缺少 email 列：解析阶段整个文件被拒绝，不会有任何行被接受
        let data = b"enrol_no,class_roll,name,password,year,section\n\
                     E001,1,Alice,pw1,2,A\n";
        match parse_students(data) {
            Err(ImportParseError::MissingColumn(col)) => assert_eq!(col, "email"),
            _ => panic!("expected missing column error"),
        }
    }

    #[test]
    fn test_bad_integer_names_the_row() {
        let data = b"enrol_no,class_roll,name,password,email,year,section\n\
                     E001,one,Alice,pw1,alice@example.edu,2,A\n";
        match parse_students(data) {
            Err(ImportParseError::ParseFailed(msg)) => {
                assert!(msg.contains("class_roll"));
                assert!(msg.contains('2'));
            }
            _ => panic!("expected parse failure"),
        }
    }

    #[test]
    fn test_header_only_file_is_empty() {
        let data = b"enrol_no,class_roll,name,password,email,year,section\n";
        assert!(matches!(
            parse_students(data),
            Err(ImportParseError::EmptyFile)
        ));
    }

    #[test]
    fn test_parse_professors() {
        let data = b"username,name,password,email\npj,P. Jones,pw1,pj@example.edu\n";
        let rows = parse_professors(data).unwrap();
        assert_eq!(rows[0].1.username, "pj");
        assert_eq!(rows[0].1.name, "P. Jones");
    }

    #[test]
    fn test_parse_subjects() {
        let data = b"sub_code,sub_name,year\nCS101,Algorithms,2\n";
        let rows = parse_subjects(data).unwrap();
        assert_eq!(rows[0].1.sub_code, "CS101");
        assert_eq!(rows[0].1.year, 2);
    }

    #[test]
    fn test_parse_routine() {
        let data = b"day,timing,year,section,sub_code,prof_username\n\
                     Mon,9-10,2,A,CS101,pj\n";
        let rows = parse_routine(data).unwrap();
        assert_eq!(rows[0].day, "Mon");
        assert_eq!(rows[0].sub_code, "CS101");
        assert_eq!(rows[0].prof_username, "pj");
    }

    #[test]
    fn test_headers_are_case_insensitive() {
        let data = b"Sub_Code,SUB_NAME,Year\nCS101,Algorithms,2\n";
        assert!(parse_subjects(data).is_ok());
    }
}
