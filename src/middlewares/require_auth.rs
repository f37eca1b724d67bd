/*!
 * 认证中间件
 *
 * 验证 JWT 访问令牌并解析会话主体。令牌的 (role, sub) 复合身份
 * 被解析回对应主体表中的一行：角色标签决定查哪张表，
 * sub 按角色各自的主键类型解析（学生为注册号字符串，
 * 管理员/教师为整数 ID）。未知角色标签或查找未命中都视为
 * 无效会话，返回 401。
 *
 * ## 使用方法
 *
 * 1. 在路由上应用中间件：
 * ```rust,ignore
 * web::scope("/api/v1/students")
 *     .wrap(RequireAuth)
 *     .route("", web::get().to(list_students))
 * ```
 *
 * 2. 在处理程序中提取主体：
 * ```rust,ignore
 * if let Some(principal) = RequireAuth::extract_principal(&req) {
 *     // principal 是 Admin / Student / Professor 之一
 * }
 * ```
 */

use crate::models::auth::entities::{Principal, PrincipalRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireAuth;

// 辅助函数：创建错误响应
fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                message,
            )),
    }
}

// 辅助函数：提取并验证 JWT access token，解析会话主体
async fn extract_and_resolve_principal(req: &ServiceRequest) -> Result<Principal, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = crate::utils::jwt::JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let role = claims
        .role
        .parse::<PrincipalRole>()
        .map_err(|_| "Unknown role tag in JWT".to_string())?;

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    // 按角色各自的主键类型查找主体
    let principal = match role {
        PrincipalRole::Admin => {
            let admin_id = claims
                .sub
                .parse::<i64>()
                .map_err(|_| "Invalid admin id in JWT".to_string())?;
            storage
                .get_admin_by_id(admin_id)
                .await
                .map_err(|_| "Failed to retrieve principal from storage".to_string())?
                .map(Principal::Admin)
        }
        PrincipalRole::Student => storage
            .get_student_by_enrol_no(&claims.sub)
            .await
            .map_err(|_| "Failed to retrieve principal from storage".to_string())?
            .map(Principal::Student),
        PrincipalRole::Professor => {
            let prof_id = claims
                .sub
                .parse::<i64>()
                .map_err(|_| "Invalid professor id in JWT".to_string())?;
            storage
                .get_professor_by_id(prof_id)
                .await
                .map_err(|_| "Failed to retrieve principal from storage".to_string())?
                .map(Principal::Professor)
        }
    };

    principal.ok_or_else(|| "Principal not found".to_string())
}

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            // 验证令牌并解析主体
            match extract_and_resolve_principal(&req).await {
                Ok(principal) => {
                    debug!(
                        "Authentication successful for {} {}",
                        principal.role(),
                        principal.subject()
                    );
                    req.extensions_mut().insert(principal);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取主体信息
impl RequireAuth {
    /// 从请求扩展中提取会话主体
    /// 此函数应该在应用了RequireAuth中间件的路由处理程序中使用
    pub fn extract_principal(req: &actix_web::HttpRequest) -> Option<Principal> {
        req.extensions().get::<Principal>().cloned()
    }

    /// 从请求扩展中提取主体角色
    /// 此函数应该在应用了RequireAuth中间件的路由处理程序中使用
    pub fn extract_role(req: &actix_web::HttpRequest) -> Option<PrincipalRole> {
        req.extensions().get::<Principal>().map(|p| p.role())
    }
}
