pub mod account;
pub mod email;
pub mod password;
pub mod subject;
pub mod validation;
