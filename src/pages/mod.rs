pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;
pub mod validate;
pub mod verify_email;
