//! Page objects for the reader and the accounts login page

pub mod content;
pub mod login;

pub use content::{content_url, ActivePanel, ContentPage};
pub use login::{login_url, LoginPage};
