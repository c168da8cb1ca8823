//! Unit tests for the password-reset service

mod service_tests;
