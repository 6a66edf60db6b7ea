pub mod auth;
pub mod blog;
pub mod category;
pub mod client_logo;
pub mod contact;
pub mod project;
pub mod service;
pub mod user;
