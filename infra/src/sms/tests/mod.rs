//! Unit tests for SMS module

mod create_sender_tests;
