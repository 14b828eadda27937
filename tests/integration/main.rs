//! Integration tests for Sumi-Sift
//!
//! These tests use wiremock to create mock HTTP servers and run full crawls
//! against them end-to-end.

mod crawl_tests;
mod export_tests;
