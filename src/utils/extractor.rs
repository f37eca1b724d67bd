//! 路径参数提取器
//!
//! 在进入处理程序之前完成参数的解析与格式校验，
//! 非法参数统一返回 ApiResponse 包装的 400。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_enrol_no;

fn bad_request(message: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        message,
    ));
    InternalError::from_response(message.to_string(), response).into()
}

/// 提取路径中的 {id} 并解析为正整数
pub struct SafeIdI64(pub i64);

impl FromRequest for SafeIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        ready(match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(SafeIdI64(id)),
            _ => Err(bad_request("Invalid id in path")),
        })
    }
}

/// 提取路径中的 {enrol_no} 并校验格式
pub struct SafeEnrolNo(pub String);

impl FromRequest for SafeEnrolNo {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("enrol_no").unwrap_or_default();
        ready(match validate_enrol_no(raw) {
            Ok(()) => Ok(SafeEnrolNo(raw.to_string())),
            Err(msg) => Err(bad_request(msg)),
        })
    }
}
