use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use once_cell::sync::Lazy;

use crate::models::auth::entities::{Principal, PrincipalRole};
use crate::models::auth::responses::LoginResponse;
use crate::models::{ApiResponse, ErrorCode, auth::LoginRequest};
use crate::utils::jwt;
use crate::utils::password::{hash_password, verify_password};

use super::AuthService;

// 查无此人时用来代替真实哈希做一次验证，
// 使失败路径的耗时与密码错误一致，不泄露账号是否存在
static DUMMY_HASH: Lazy<String> =
    Lazy::new(|| hash_password("dummy-password").unwrap_or_default());

// 认证失败统一返回同一条消息，不区分"用户不存在"与"密码错误"
fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        "Invalid credentials",
    ))
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 角色选择器决定在哪张主体表中按自然键查找
    let lookup = match login_request.role {
        PrincipalRole::Admin => storage
            .get_admin_by_username(&login_request.username)
            .await
            .map(|o| o.map(Principal::Admin)),
        PrincipalRole::Student => storage
            .get_student_by_enrol_no(&login_request.username)
            .await
            .map(|o| o.map(Principal::Student)),
        PrincipalRole::Professor => storage
            .get_professor_by_username(&login_request.username)
            .await
            .map(|o| o.map(Principal::Professor)),
    };

    let principal = match lookup {
        Ok(Some(principal)) => principal,
        Ok(None) => {
            let _ = verify_password(&login_request.password, &DUMMY_HASH);
            return Ok(invalid_credentials());
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login failed: {e}"),
                )),
            );
        }
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, principal.password_hash()) {
        return Ok(invalid_credentials());
    }

    // 3. 生成令牌对（复合身份：角色标签 + 角色内主键）
    let subject = principal.subject();
    let role = principal.role().to_string();
    let refresh_expiry = login_request
        .remember_me
        .then(|| chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry));

    match jwt::JwtUtils::generate_token_pair(&subject, &role, refresh_expiry) {
        Ok(token_pair) => {
            tracing::info!("{} {} logged in successfully", role, subject);

            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
                principal,
                created_at: chrono::Utc::now(),
            };

            // 4. 创建 refresh token cookie
            let refresh_cookie =
                jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
