pub mod cli;
pub mod comment;
pub mod error;
pub mod grade;
pub mod model;
pub mod report;
pub mod template;
