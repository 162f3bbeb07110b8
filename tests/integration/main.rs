//! Integration tests for landing-ticker

mod common;
mod config_test;
mod landing_test;
mod quote_test;
mod refresh_test;
