//! Page components, one per route. Pages wire forms and lists to the
//! network helpers and route every protected view through the session gate.

pub mod find_id;
pub mod find_password;
pub mod home;
pub mod list;
pub mod login;
pub mod reset_password;
pub mod signup;
pub mod write;
