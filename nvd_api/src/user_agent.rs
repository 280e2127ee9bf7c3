/// Identifying user agent sent with every request, e.g. `nvd_api/0.1.0`.
pub fn get_user_agent() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
}
