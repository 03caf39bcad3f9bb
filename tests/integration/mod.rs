//! Shared fixtures for tests that run against a mock HTTP server
#![allow(dead_code)]

pub mod mock_server;
