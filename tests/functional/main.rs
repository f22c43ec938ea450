//! Functional tests against a mocked image service

mod console_test;
mod file_test;
