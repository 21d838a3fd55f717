mod login;

pub(crate) use login::login_page;
