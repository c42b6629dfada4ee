pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod services;
