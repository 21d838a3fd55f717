//! Cookie access abstraction
//!
//! The authenticator never talks to an HTTP framework directly. It reads and
//! writes cookies through [`CookieContext`], which a host framework (or a
//! test) implements. [`HeaderCookies`] is the implementation over plain
//! `http` header maps.

use std::collections::HashMap;

use http::HeaderMap;
use http::header::{COOKIE, HeaderValue, SET_COOKIE};

use crate::session::config::SESSION_MAX_AGE_SECS;
use crate::session::errors::SessionError;

/// Minimal cookie capability the session accessor needs from the host framework.
pub trait CookieContext {
    /// Value of the named request cookie, `Ok(None)` when it is absent
    fn get_cookie(&self, name: &str) -> Result<Option<String>, SessionError>;

    /// Write (or overwrite) a cookie on the response
    fn set_cookie(
        &mut self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<(), SessionError>;

    /// Remove a cookie. Deleting an absent cookie is not an error.
    fn delete_cookie(&mut self, name: &str, options: &CookieOptions) -> Result<(), SessionError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
    pub max_age_secs: i64,
    pub path: String,
}

impl CookieOptions {
    /// Attributes of the session cookie: HttpOnly, Lax, `/`, 30 days.
    pub fn session(secure: bool) -> Self {
        Self {
            http_only: true,
            secure,
            same_site: SameSite::Lax,
            max_age_secs: SESSION_MAX_AGE_SECS,
            path: "/".to_string(),
        }
    }
}

/// Cookie context backed by request headers, collecting `Set-Cookie` headers
/// for the response.
///
/// Reads reflect writes made through the same instance, so a cookie set
/// during a request is visible to later reads in that request.
#[derive(Debug, Default, Clone)]
pub struct HeaderCookies {
    request: HashMap<String, String>,
    read_error: Option<String>,
    overrides: HashMap<String, Option<String>>,
    pending: Vec<(String, HeaderValue)>,
}

impl HeaderCookies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every `Cookie` header of a request.
    ///
    /// When a name appears more than once the first occurrence wins.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut cookies = Self::new();

        for header in headers.get_all(COOKIE) {
            let cookie_str = match header.to_str() {
                Ok(s) => s,
                Err(e) => {
                    tracing::error!("Invalid cookie header: {}", e);
                    cookies.read_error = Some("Invalid cookie header".to_string());
                    continue;
                }
            };

            for pair in cookie_str.split(';').map(|s| s.trim()) {
                let mut parts = pair.splitn(2, '=');
                if let (Some(k), Some(v)) = (parts.next(), parts.next()) {
                    let k = k.trim();
                    if k.is_empty() {
                        continue;
                    }
                    cookies
                        .request
                        .entry(k.to_string())
                        .or_insert_with(|| v.trim().to_string());
                }
            }
        }

        cookies
    }

    /// `Set-Cookie` values produced so far, in write order
    pub fn set_cookie_headers(&self) -> impl Iterator<Item = &HeaderValue> {
        self.pending.iter().map(|(_, value)| value)
    }

    /// Append the pending `Set-Cookie` headers to a response header map.
    pub fn apply_to(&self, headers: &mut HeaderMap) {
        for value in self.set_cookie_headers() {
            headers.append(SET_COOKIE, value.clone());
        }
    }

    pub fn into_header_map(self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.apply_to(&mut headers);
        headers
    }

    fn push_set_cookie(&mut self, name: &str, cookie: String) -> Result<(), SessionError> {
        let value = cookie
            .parse::<HeaderValue>()
            .map_err(|_| SessionError::Cookie("Failed to parse cookie".to_string()))?;
        self.pending.retain(|(pending_name, _)| pending_name != name);
        self.pending.push((name.to_string(), value));
        Ok(())
    }
}

impl CookieContext for HeaderCookies {
    fn get_cookie(&self, name: &str) -> Result<Option<String>, SessionError> {
        if let Some(value) = self.overrides.get(name) {
            return Ok(value.clone());
        }
        if let Some(err) = &self.read_error {
            return Err(SessionError::HeaderError(err.clone()));
        }
        Ok(self.request.get(name).cloned())
    }

    fn set_cookie(
        &mut self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<(), SessionError> {
        validate_cookie_pair(name, value)?;
        self.push_set_cookie(name, render_set_cookie(name, value, options))?;
        self.overrides
            .insert(name.to_string(), Some(value.to_string()));
        Ok(())
    }

    fn delete_cookie(&mut self, name: &str, options: &CookieOptions) -> Result<(), SessionError> {
        validate_cookie_pair(name, "")?;
        let expired = CookieOptions {
            max_age_secs: 0,
            ..options.clone()
        };
        self.push_set_cookie(name, render_set_cookie(name, "", &expired))?;
        self.overrides.insert(name.to_string(), None);
        Ok(())
    }
}

pub(crate) fn render_set_cookie(name: &str, value: &str, options: &CookieOptions) -> String {
    let mut cookie = format!("{name}={value}; SameSite={}", options.same_site.as_str());
    if options.secure {
        cookie.push_str("; Secure");
    }
    if options.http_only {
        cookie.push_str("; HttpOnly");
    }
    cookie.push_str(&format!(
        "; Path={}; Max-Age={}",
        options.path, options.max_age_secs
    ));
    if options.max_age_secs <= 0 {
        cookie.push_str("; Expires=Thu, 01 Jan 1970 00:00:00 GMT");
    }
    cookie
}

fn validate_cookie_pair(name: &str, value: &str) -> Result<(), SessionError> {
    let name_ok = !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_graphic() && !b"()<>@,;:\\\"/[]?={}".contains(&b));
    if !name_ok {
        return Err(SessionError::Cookie(format!("Invalid cookie name: {name}")));
    }

    // cookie-octet from RFC 6265
    let value_ok = value
        .bytes()
        .all(|b| b.is_ascii_graphic() && !matches!(b, b'"' | b',' | b';' | b'\\'));
    if !value_ok {
        return Err(SessionError::Cookie("Invalid cookie value".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_session_options() {
        let options = CookieOptions::session(false);
        assert!(options.http_only);
        assert!(!options.secure);
        assert_eq!(options.same_site, SameSite::Lax);
        assert_eq!(options.max_age_secs, 2_592_000);
        assert_eq!(options.path, "/");
        assert!(CookieOptions::session(true).secure);
    }

    #[test]
    fn test_render_session_cookie() {
        let cookie = render_set_cookie("auth-token", "abc.def.ghi", &CookieOptions::session(false));
        assert_eq!(
            cookie,
            "auth-token=abc.def.ghi; SameSite=Lax; HttpOnly; Path=/; Max-Age=2592000"
        );
    }

    #[test]
    fn test_render_secure_cookie() {
        let cookie = render_set_cookie("auth-token", "v", &CookieOptions::session(true));
        assert!(cookie.contains("; Secure"));
        assert!(cookie.contains("; HttpOnly"));
        assert!(cookie.contains("; SameSite=Lax"));
    }

    #[test]
    fn test_parse_cookie_header() {
        let cookies = HeaderCookies::from_headers(&headers_with_cookie(
            "theme=dark; auth-token=abc.def.ghi;  other=1",
        ));
        assert_eq!(
            cookies.get_cookie("auth-token").unwrap().as_deref(),
            Some("abc.def.ghi")
        );
        assert_eq!(cookies.get_cookie("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(cookies.get_cookie("missing").unwrap(), None);
    }

    #[test]
    fn test_parse_multiple_cookie_headers_first_wins() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("a=1"));
        headers.append(COOKIE, HeaderValue::from_static("auth-token=first; b=2"));
        headers.append(COOKIE, HeaderValue::from_static("auth-token=second"));
        let cookies = HeaderCookies::from_headers(&headers);

        assert_eq!(cookies.get_cookie("a").unwrap().as_deref(), Some("1"));
        assert_eq!(cookies.get_cookie("b").unwrap().as_deref(), Some("2"));
        assert_eq!(
            cookies.get_cookie("auth-token").unwrap().as_deref(),
            Some("first")
        );
    }

    #[test]
    fn test_prefix_named_cookie_does_not_match() {
        let cookies = HeaderCookies::from_headers(&headers_with_cookie("auth-token-old=x"));
        assert_eq!(cookies.get_cookie("auth-token").unwrap(), None);
    }

    #[test]
    fn test_non_utf8_cookie_header_is_a_read_error() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_bytes(b"auth-token=\xff\xfe").unwrap());
        let cookies = HeaderCookies::from_headers(&headers);
        assert!(cookies.get_cookie("auth-token").is_err());
    }

    #[test]
    fn test_set_is_visible_and_emitted() {
        let mut cookies = HeaderCookies::new();
        cookies
            .set_cookie("auth-token", "tok", &CookieOptions::session(false))
            .unwrap();

        assert_eq!(cookies.get_cookie("auth-token").unwrap().as_deref(), Some("tok"));
        let headers = cookies.into_header_map();
        let set_cookie: Vec<_> = headers.get_all(SET_COOKIE).iter().collect();
        assert_eq!(set_cookie.len(), 1);
        assert!(set_cookie[0].to_str().unwrap().starts_with("auth-token=tok;"));
    }

    #[test]
    fn test_second_set_replaces_first() {
        let mut cookies = HeaderCookies::from_headers(&headers_with_cookie("auth-token=old"));
        let options = CookieOptions::session(false);
        cookies.set_cookie("auth-token", "one", &options).unwrap();
        cookies.set_cookie("auth-token", "two", &options).unwrap();

        assert_eq!(cookies.get_cookie("auth-token").unwrap().as_deref(), Some("two"));
        let values: Vec<_> = cookies.set_cookie_headers().collect();
        assert_eq!(values.len(), 1);
        assert!(values[0].to_str().unwrap().starts_with("auth-token=two;"));
    }

    #[test]
    fn test_delete_emits_expired_cookie() {
        let mut cookies = HeaderCookies::from_headers(&headers_with_cookie("auth-token=abc"));
        cookies
            .delete_cookie("auth-token", &CookieOptions::session(true))
            .unwrap();

        assert_eq!(cookies.get_cookie("auth-token").unwrap(), None);
        let value = cookies.set_cookie_headers().next().unwrap().to_str().unwrap();
        assert!(value.starts_with("auth-token=;"));
        assert!(value.contains("Max-Age=0"));
        assert!(value.contains("Expires=Thu, 01 Jan 1970 00:00:00 GMT"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("Secure"));
    }

    #[test]
    fn test_delete_overrides_read_error() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_bytes(b"auth-token=\xff").unwrap());
        let mut cookies = HeaderCookies::from_headers(&headers);
        cookies
            .delete_cookie("auth-token", &CookieOptions::session(false))
            .unwrap();
        assert_eq!(cookies.get_cookie("auth-token").unwrap(), None);
    }

    #[test]
    fn test_invalid_values_are_refused() {
        let mut cookies = HeaderCookies::new();
        let options = CookieOptions::session(false);
        assert!(cookies.set_cookie("auth-token", "a;b", &options).is_err());
        assert!(cookies.set_cookie("auth-token", "a b", &options).is_err());
        assert!(cookies.set_cookie("auth-token", "a\r\nb", &options).is_err());
        assert!(cookies.set_cookie("bad name", "v", &options).is_err());
        assert!(cookies.set_cookie("", "v", &options).is_err());
        assert_eq!(cookies.set_cookie_headers().count(), 0);
    }

    #[test]
    fn test_apply_to_appends() {
        let mut cookies = HeaderCookies::new();
        let options = CookieOptions::session(false);
        cookies.set_cookie("auth-token", "x", &options).unwrap();
        cookies.set_cookie("theme", "dark", &options).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(SET_COOKIE, HeaderValue::from_static("existing=1"));
        cookies.apply_to(&mut headers);
        assert_eq!(headers.get_all(SET_COOKIE).iter().count(), 3);
    }
}
