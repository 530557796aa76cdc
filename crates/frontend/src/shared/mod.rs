pub mod api_utils;
pub mod code_highlight;
pub mod components;
pub mod markdown;
