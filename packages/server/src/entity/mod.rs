pub mod blog_post;
pub mod category;
pub mod client_logo;
pub mod contact_submission;
pub mod project;
pub mod service;
pub mod user;
