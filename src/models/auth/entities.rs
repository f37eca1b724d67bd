use serde::{Deserialize, Serialize};

use crate::models::professors::entities::Professor;
use crate::models::students::entities::Student;

// 主体角色
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalRole {
    Admin,     // 管理员
    Student,   // 学生
    Professor, // 教师
}

impl PrincipalRole {
    pub const ADMIN: &'static str = "admin";
    pub const STUDENT: &'static str = "student";
    pub const PROFESSOR: &'static str = "professor";

    pub fn admin_roles() -> &'static [&'static PrincipalRole] {
        &[&Self::Admin]
    }
    pub fn professor_roles() -> &'static [&'static PrincipalRole] {
        &[&Self::Professor]
    }
    pub fn student_roles() -> &'static [&'static PrincipalRole] {
        &[&Self::Student]
    }
}

impl<'de> Deserialize<'de> for PrincipalRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            PrincipalRole::ADMIN => Ok(PrincipalRole::Admin),
            PrincipalRole::STUDENT => Ok(PrincipalRole::Student),
            PrincipalRole::PROFESSOR => Ok(PrincipalRole::Professor),
            _ => Err(serde::de::Error::custom(format!(
                "无效的角色: '{s}'. 支持的角色: admin, student, professor"
            ))),
        }
    }
}

impl std::fmt::Display for PrincipalRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrincipalRole::Admin => write!(f, "{}", PrincipalRole::ADMIN),
            PrincipalRole::Student => write!(f, "{}", PrincipalRole::STUDENT),
            PrincipalRole::Professor => write!(f, "{}", PrincipalRole::PROFESSOR),
        }
    }
}

impl std::str::FromStr for PrincipalRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(PrincipalRole::Admin),
            "student" => Ok(PrincipalRole::Student),
            "professor" => Ok(PrincipalRole::Professor),
            _ => Err(format!("Invalid principal role: {s}")),
        }
    }
}

// 管理员实体（仅通过带外初始化创建，任何路由都不修改它）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub admin_id: i64,
    pub username: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
}

// 已认证主体：按角色分表存储，会话解析后统一为带标签的联合类型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Principal {
    Admin(Admin),
    Student(Student),
    Professor(Professor),
}

impl Principal {
    pub fn role(&self) -> PrincipalRole {
        match self {
            Principal::Admin(_) => PrincipalRole::Admin,
            Principal::Student(_) => PrincipalRole::Student,
            Principal::Professor(_) => PrincipalRole::Professor,
        }
    }

    /// 角色内主键的字符串形式，作为 JWT 的 subject。
    /// 学生使用注册号（字符串键），管理员与教师使用整数 ID。
    pub fn subject(&self) -> String {
        match self {
            Principal::Admin(a) => a.admin_id.to_string(),
            Principal::Student(s) => s.enrol_no.clone(),
            Principal::Professor(p) => p.prof_id.to_string(),
        }
    }

    pub fn password_hash(&self) -> &str {
        match self {
            Principal::Admin(a) => &a.password_hash,
            Principal::Student(s) => &s.password_hash,
            Principal::Professor(p) => &p.password_hash,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Principal::Admin(a) => &a.username,
            Principal::Student(s) => &s.name,
            Principal::Professor(p) => &p.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in ["admin", "student", "professor"] {
            let parsed = role.parse::<PrincipalRole>().unwrap();
            assert_eq!(parsed.to_string(), role);
        }
        assert!("teacher".parse::<PrincipalRole>().is_err());
    }

    #[test]
    fn test_principal_subject_encoding() {
        let admin = Principal::Admin(Admin {
            admin_id: 1,
            username: "root".into(),
            password_hash: String::new(),
        });
        assert_eq!(admin.subject(), "1");
        assert_eq!(admin.role(), PrincipalRole::Admin);

        let student = Principal::Student(Student {
            enrol_no: "E001".into(),
            class_roll: 1,
            name: "Alice".into(),
            password_hash: String::new(),
            email: None,
            parent_email: None,
            year: 2,
            section: "A".into(),
        });
        assert_eq!(student.subject(), "E001");
        assert_eq!(student.role(), PrincipalRole::Student);
    }
}
