pub mod dispatch;
pub mod form;
pub mod submission;
pub mod validate;
