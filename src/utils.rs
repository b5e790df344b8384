pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cookie string for `Set-Cookie`. `Secure` is only set when serving over HTTPS.
pub fn cookie(name: &str, value: &str, max_age: u64, secure: bool) -> String {
    let secure = if secure { " Secure;" } else { "" };
    format!("{name}={value}; HttpOnly; Max-Age={max_age};{secure} Path=/; SameSite=Strict")
}
