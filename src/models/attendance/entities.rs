use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

// 考勤状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
    Late,
}

impl AttendanceStatus {
    pub const PRESENT: &'static str = "present";
    pub const ABSENT: &'static str = "absent";
    pub const LEAVE: &'static str = "leave";
    pub const LATE: &'static str = "late";
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AttendanceStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的考勤状态: '{s}'. 支持: present, absent, leave, late"
            ))
        })
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AttendanceStatus::Present => AttendanceStatus::PRESENT,
            AttendanceStatus::Absent => AttendanceStatus::ABSENT,
            AttendanceStatus::Leave => AttendanceStatus::LEAVE,
            AttendanceStatus::Late => AttendanceStatus::LATE,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "leave" => Ok(AttendanceStatus::Leave),
            "late" => Ok(AttendanceStatus::Late),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

// 教师视角的考勤记录视图（连接学生与科目描述字段）
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct ProfessorRecordView {
    pub attendance_id: i64,
    pub enrol_no: String,
    pub student_name: String,
    pub class_date: chrono::NaiveDate,
    pub sub_name: Option<String>,
    pub status: String,
    pub remarks: Option<String>,
}

// 学生视角的考勤记录视图（连接科目名称）
#[derive(Debug, Clone, Serialize, FromQueryResult)]
pub struct StudentAttendanceView {
    pub attendance_id: i64,
    pub class_date: chrono::NaiveDate,
    pub sub_name: Option<String>,
    pub status: String,
    pub remarks: Option<String>,
}

// 单科目考勤汇总（总是从台账实时计算，不信任任何缓存值）
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SubjectSummary {
    pub subject: String,
    pub total: u32,
    pub attended: u32,
    pub percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["present", "absent", "leave", "late"] {
            let parsed = s.parse::<AttendanceStatus>().unwrap();
            assert_eq!(parsed.to_string(), s);
        }
        assert!("sick".parse::<AttendanceStatus>().is_err());
    }
}
