pub mod app_error;
pub mod email_templates;
pub mod language;
pub mod use_cases;
