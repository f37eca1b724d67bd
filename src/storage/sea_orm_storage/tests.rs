//! 存储层测试（内存 SQLite，真实迁移）

use super::SeaOrmStorage;
use crate::models::attendance::entities::AttendanceStatus;
use crate::models::attendance::requests::NewAttendanceRecord;
use crate::models::professors::requests::CreateProfessorRequest;
use crate::models::routines::entities::Day;
use crate::models::routines::requests::NewRoutineRecord;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::subjects::requests::CreateSubjectRequest;
use crate::storage::Storage;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

async fn storage() -> SeaOrmStorage {
    // 内存库必须固定在单个连接上，否则池中的每个连接都是独立的空库
    let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1);
    let db = Database::connect(opt)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    SeaOrmStorage { db }
}

fn student(enrol_no: &str, roll: i32, name: &str, year: i32, section: &str) -> CreateStudentRequest {
    CreateStudentRequest {
        enrol_no: enrol_no.to_string(),
        class_roll: roll,
        name: name.to_string(),
        // 测试不关心哈希算法，存一个占位哈希即可
        password: "$argon2id$test".to_string(),
        email: format!("{}@example.edu", enrol_no.to_lowercase()),
        parent_email: None,
        year,
        section: section.to_string(),
    }
}

fn professor(username: &str, name: &str) -> CreateProfessorRequest {
    CreateProfessorRequest {
        username: username.to_string(),
        name: name.to_string(),
        email: format!("{username}@example.edu"),
        password: "$argon2id$test".to_string(),
    }
}

fn subject(code: &str, name: &str, year: i32) -> CreateSubjectRequest {
    CreateSubjectRequest {
        sub_code: code.to_string(),
        sub_name: name.to_string(),
        year,
    }
}

fn attendance_row(
    enrol_no: &str,
    date: &str,
    routine_id: i64,
    sub_id: i64,
    prof_id: i64,
    status: AttendanceStatus,
) -> NewAttendanceRecord {
    NewAttendanceRecord {
        enrol_no: enrol_no.to_string(),
        class_date: date.parse().expect("valid date literal"),
        routine_id: Some(routine_id),
        period: None,
        sub_id: Some(sub_id),
        prof_id: Some(prof_id),
        status,
        marked_by: Some(prof_id),
        remarks: None,
    }
}

#[tokio::test]
async fn delete_missing_professor_leaves_table_unchanged() {
    let storage = storage().await;
    let created = storage.create_professor(professor("pj", "P. Jones")).await.unwrap();

    assert!(!storage.delete_professor(created.prof_id + 100).await.unwrap());
    assert_eq!(storage.list_professors().await.unwrap().len(), 1);

    assert!(storage.delete_professor(created.prof_id).await.unwrap());
    assert!(storage.list_professors().await.unwrap().is_empty());
}

#[tokio::test]
async fn cohort_roster_matches_year_and_section() {
    let storage = storage().await;
    storage.create_student(student("E001", 1, "Alice", 2, "A")).await.unwrap();
    storage.create_student(student("E002", 2, "Bob", 2, "A")).await.unwrap();
    storage.create_student(student("E003", 3, "Carol", 2, "B")).await.unwrap();
    storage.create_student(student("E004", 4, "Dave", 3, "A")).await.unwrap();

    let roster = storage.list_students_by_cohort(2, "A").await.unwrap();
    let enrol_nos: Vec<_> = roster.iter().map(|s| s.enrol_no.as_str()).collect();
    assert_eq!(enrol_nos, vec!["E001", "E002"]);
}

#[tokio::test]
async fn routine_view_carries_subject_and_professor_fields() {
    let storage = storage().await;
    let sub = storage.create_subject(subject("CS101", "Algorithms", 2)).await.unwrap();
    let prof = storage.create_professor(professor("pj", "P. Jones")).await.unwrap();

    let routine = storage
        .create_routine(NewRoutineRecord {
            day: Day::Mon,
            timing: "9-10".to_string(),
            year: 2,
            section: "A".to_string(),
            sub_id: Some(sub.sub_id),
            prof_id: Some(prof.prof_id),
        })
        .await
        .unwrap();

    let views = storage.list_routines_by_professor(prof.prof_id).await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].routine_id, routine.routine_id);
    assert_eq!(views[0].day, "Mon");
    assert_eq!(views[0].sub_code.as_deref(), Some("CS101"));
    assert_eq!(views[0].sub_name.as_deref(), Some("Algorithms"));
    assert_eq!(views[0].prof_username.as_deref(), Some("pj"));
}

#[tokio::test]
async fn double_submission_doubles_ledger_rows() {
    let storage = storage().await;
    let sub = storage.create_subject(subject("CS101", "Algorithms", 2)).await.unwrap();
    let prof = storage.create_professor(professor("pj", "P. Jones")).await.unwrap();
    storage.create_student(student("E001", 1, "Alice", 2, "A")).await.unwrap();
    storage.create_student(student("E002", 2, "Bob", 2, "A")).await.unwrap();

    let routine = storage
        .create_routine(NewRoutineRecord {
            day: Day::Mon,
            timing: "9-10".to_string(),
            year: 2,
            section: "A".to_string(),
            sub_id: Some(sub.sub_id),
            prof_id: Some(prof.prof_id),
        })
        .await
        .unwrap();

    let batch = vec![
        attendance_row(
            "E001",
            "2024-01-15",
            routine.routine_id,
            sub.sub_id,
            prof.prof_id,
            AttendanceStatus::Present,
        ),
        attendance_row(
            "E002",
            "2024-01-15",
            routine.routine_id,
            sub.sub_id,
            prof.prof_id,
            AttendanceStatus::Absent,
        ),
    ];

    assert_eq!(storage.insert_attendance_batch(batch.clone()).await.unwrap(), 2);
    assert_eq!(storage.insert_attendance_batch(batch).await.unwrap(), 2);

    // 台账只追加：重复提交翻倍，而不是覆盖
    let records = storage.list_attendance_by_professor(prof.prof_id).await.unwrap();
    assert_eq!(records.len(), 4);
}

#[tokio::test]
async fn student_history_is_newest_first_and_joined_with_subject() {
    let storage = storage().await;
    let sub = storage.create_subject(subject("CS101", "Algorithms", 2)).await.unwrap();
    let prof = storage.create_professor(professor("pj", "P. Jones")).await.unwrap();
    storage.create_student(student("E001", 1, "Alice", 2, "A")).await.unwrap();

    let routine = storage
        .create_routine(NewRoutineRecord {
            day: Day::Mon,
            timing: "9-10".to_string(),
            year: 2,
            section: "A".to_string(),
            sub_id: Some(sub.sub_id),
            prof_id: Some(prof.prof_id),
        })
        .await
        .unwrap();

    for (date, status) in [
        ("2024-01-15", AttendanceStatus::Present),
        ("2024-01-22", AttendanceStatus::Absent),
        ("2024-01-08", AttendanceStatus::Late),
    ] {
        storage
            .insert_attendance_batch(vec![attendance_row(
                "E001",
                date,
                routine.routine_id,
                sub.sub_id,
                prof.prof_id,
                status,
            )])
            .await
            .unwrap();
    }

    let history = storage.list_attendance_by_student("E001").await.unwrap();
    let dates: Vec<String> = history.iter().map(|r| r.class_date.to_string()).collect();
    assert_eq!(dates, vec!["2024-01-22", "2024-01-15", "2024-01-08"]);
    assert!(history.iter().all(|r| r.sub_name.as_deref() == Some("Algorithms")));
}

#[tokio::test]
async fn import_students_commits_all_rows() {
    let storage = storage().await;
    let rows = vec![
        student("E001", 1, "Alice", 2, "A"),
        student("E002", 2, "Bob", 2, "A"),
        student("E003", 3, "Carol", 2, "B"),
    ];

    assert_eq!(storage.import_students(rows).await.unwrap(), 3);
    assert_eq!(storage.list_students().await.unwrap().len(), 3);
}

#[tokio::test]
async fn import_with_duplicate_key_rolls_back_whole_batch() {
    let storage = storage().await;
    storage.create_student(student("E001", 1, "Alice", 2, "A")).await.unwrap();

    // E001 已存在：整批导入必须失败且不留下半写状态
    let rows = vec![
        student("E100", 10, "Xavier", 2, "A"),
        student("E001", 1, "Alice", 2, "A"),
    ];
    assert!(storage.import_students(rows).await.is_err());
    assert_eq!(storage.list_students().await.unwrap().len(), 1);
}
