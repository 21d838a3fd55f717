//! Cookie contexts for session module tests

use std::collections::HashMap;

use crate::session::errors::SessionError;

use super::cookie::{CookieContext, CookieOptions};

/// In-memory cookie jar that records the options of every write
#[derive(Debug, Default)]
pub(crate) struct MemoryCookies {
    values: HashMap<String, (String, Option<CookieOptions>)>,
}

impl MemoryCookies {
    pub(crate) fn with_cookie(name: &str, value: &str) -> Self {
        let mut cookies = Self::default();
        cookies
            .values
            .insert(name.to_string(), (value.to_string(), None));
        cookies
    }

    pub(crate) fn options(&self, name: &str) -> Option<CookieOptions> {
        self.values.get(name).and_then(|(_, options)| options.clone())
    }
}

impl CookieContext for MemoryCookies {
    fn get_cookie(&self, name: &str) -> Result<Option<String>, SessionError> {
        Ok(self.values.get(name).map(|(value, _)| value.clone()))
    }

    fn set_cookie(
        &mut self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<(), SessionError> {
        self.values.insert(
            name.to_string(),
            (value.to_string(), Some(options.clone())),
        );
        Ok(())
    }

    fn delete_cookie(&mut self, name: &str, _options: &CookieOptions) -> Result<(), SessionError> {
        self.values.remove(name);
        Ok(())
    }
}

/// Cookie context whose transport always fails
pub(crate) struct FailingCookies;

impl CookieContext for FailingCookies {
    fn get_cookie(&self, _name: &str) -> Result<Option<String>, SessionError> {
        Err(SessionError::Cookie("cookie store unavailable".to_string()))
    }

    fn set_cookie(
        &mut self,
        _name: &str,
        _value: &str,
        _options: &CookieOptions,
    ) -> Result<(), SessionError> {
        Err(SessionError::Cookie("cookie store unavailable".to_string()))
    }

    fn delete_cookie(&mut self, _name: &str, _options: &CookieOptions) -> Result<(), SessionError> {
        Err(SessionError::Cookie("cookie store unavailable".to_string()))
    }
}
