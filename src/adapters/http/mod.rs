pub mod app_error_impl;
pub mod app_state;
pub mod flash;
pub mod pages;
pub mod routes;
