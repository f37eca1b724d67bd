use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static ENROL_NO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9/_-]+$").expect("Invalid enrolment number regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：2 <= x <= 32
    if username.len() < 2 || username.len() > 32 {
        return Err("Username length must be between 2 and 32 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_enrol_no(enrol_no: &str) -> Result<(), &'static str> {
    // 注册号长度校验：1 <= x <= 20（与数据库列宽一致）
    if enrol_no.is_empty() || enrol_no.len() > 20 {
        return Err("Enrolment number length must be between 1 and 20 characters");
    }
    if !ENROL_NO_RE.is_match(enrol_no) {
        return Err("Enrolment number must contain only letters, numbers, '/', '_' or '-'");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    // 密码仅做存在性与长度上限校验，强度策略由各学院自行决定
    if password.is_empty() {
        return Err("Password must not be empty");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters long");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("pj").is_ok());
        assert!(validate_username("prof_smith-2").is_ok());
    }

    #[test]
    fn test_invalid_username() {
        assert!(validate_username("a").is_err());
        assert!(validate_username("has space").is_err());
        assert!(validate_username(&"x".repeat(33)).is_err());
    }

    #[test]
    fn test_valid_enrol_no() {
        assert!(validate_enrol_no("E001").is_ok());
        assert!(validate_enrol_no("2024/CS/042").is_ok());
    }

    #[test]
    fn test_invalid_enrol_no() {
        assert!(validate_enrol_no("").is_err());
        assert!(validate_enrol_no("E 001").is_err());
        assert!(validate_enrol_no(&"9".repeat(21)).is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("alice@example.edu").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_password() {
        assert!(validate_password("pw1").is_ok());
        assert!(validate_password("").is_err());
        assert!(validate_password(&"p".repeat(129)).is_err());
    }
}
