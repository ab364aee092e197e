//! Login Stub
//!
//! Cosmetic gate: a fixed delay, then a cookie flag. No credentials are
//! checked anywhere.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;

pub const AUTH_COOKIE: &str = "kanban-auth";
/// Simulated network delay before sign-in succeeds
pub const LOGIN_DELAY_MS: u32 = 1000;
/// Cookie lifetime: one day
const AUTH_MAX_AGE_SECS: u32 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

fn html_document() -> Option<web_sys::HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Whether a `document.cookie` string carries the auth flag
pub fn has_auth_cookie(cookies: &str) -> bool {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .any(|(name, value)| name == AUTH_COOKIE && value == "true")
}

pub fn is_signed_in() -> bool {
    html_document()
        .and_then(|doc| doc.cookie().ok())
        .is_some_and(|cookies| has_auth_cookie(&cookies))
}

fn write_cookie(value: &str) {
    if let Some(doc) = html_document() {
        if doc.set_cookie(value).is_err() {
            web_sys::console::warn_1(&"[AUTH] Failed to write auth cookie".into());
        }
    }
}

/// Wait out the simulated delay, then set the auth flag. Always succeeds.
pub async fn sign_in() {
    TimeoutFuture::new(LOGIN_DELAY_MS).await;
    write_cookie(&format!("{}=true; path=/; max-age={}", AUTH_COOKIE, AUTH_MAX_AGE_SECS));
}

pub fn sign_out() {
    write_cookie(&format!("{}=; path=/; max-age=0", AUTH_COOKIE));
}

/// Login form checks, returning the message to show on failure
pub fn validate_login(mode: AuthMode, email: &str, password: &str, name: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("请输入邮箱地址");
    }
    if !email.contains('@') {
        return Err("请输入有效的邮箱格式");
    }
    if mode == AuthMode::Register && name.trim().is_empty() {
        return Err("请输入您的昵称");
    }
    if password.is_empty() {
        return Err("密码不能为空");
    }
    if password.chars().count() < 6 {
        return Err("密码长度至少需要6位");
    }
    Ok(())
}
