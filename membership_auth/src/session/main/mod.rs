mod cookie;
mod session;
mod token;

#[cfg(test)]
pub(crate) mod test_utils;

pub use cookie::{CookieContext, CookieOptions, HeaderCookies, SameSite};

pub(crate) use session::{clear_session, get_session, set_session_cookie};
pub(crate) use token::TokenCodec;
