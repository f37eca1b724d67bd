use serde::Deserialize;

use super::entities::PrincipalRole;

// 登录请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 登录角色（决定在哪张主体表中查找）
    pub role: PrincipalRole,
    /// 管理员/教师用户名，或学生注册号
    pub username: String,
    /// 密码
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}
