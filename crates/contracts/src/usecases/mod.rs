pub mod common;
pub mod u501_review_code;
