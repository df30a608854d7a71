//! Shared test utilities for function-handler integration tests.

#![allow(dead_code)]

use function_host_doubles::{
    ExecutionContextDouble, HttpRequestDouble, Logger, Method, TraceContextDouble, Uri,
};
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub type Request = HttpRequestDouble<String>;

pub const TRACE_PARENT: &str = "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("function_handler=debug")),
        )
        .with_test_writer()
        .without_time()
        .try_init();
}

/// Creates a context with a fresh invocation id and a sampled traceparent.
pub fn context(logger: Arc<dyn Logger>) -> ExecutionContextDouble {
    ExecutionContextDouble::new(
        uuid::Uuid::new_v4().to_string(),
        TraceContextDouble::new(TRACE_PARENT, "congo=t61rcWkgMzE", HashMap::new()),
        logger,
        "orders",
    )
}

pub fn request() -> Request {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    HttpRequestDouble::new(
        Uri::from_static("https://localhost/api/orders"),
        Method::POST,
        headers,
        HashMap::new(),
        r#"{"item":"book","quantity":1}"#.to_string(),
    )
}

/// What the domain logic under test does.
#[derive(Debug, Clone)]
pub enum Outcome {
    Value(u32),
    DomainError(String),
    Panic(String),
}

impl Outcome {
    pub async fn run(self) -> Result<u32, String> {
        match self {
            Outcome::Value(value) => Ok(value),
            Outcome::DomainError(error) => Err(error),
            Outcome::Panic(message) => panic!("{}", message),
        }
    }
}

pub fn any_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        any::<u32>().prop_map(Outcome::Value),
        "[a-z ]{1,24}".prop_map(Outcome::DomainError),
        "[a-z ]{1,24}".prop_map(Outcome::Panic),
    ]
}

/// How a callback under test behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    Default,
    Failing,
    Panicking,
}

pub fn any_callback() -> impl Strategy<Value = Callback> {
    prop_oneof![
        Just(Callback::Default),
        Just(Callback::Failing),
        Just(Callback::Panicking),
    ]
}
