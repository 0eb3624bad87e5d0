use crate::ExecLog;

use async_trait::async_trait;
use quarry_core::{
    driver::{Connection, Operation, Response},
    stmt::Value,
    Result,
};

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

#[derive(Debug)]
pub struct DriverOp {
    pub operation: Operation,
    pub response: Result<Response>,
}

/// A connection that records every operation and answers with queued
/// responses.
///
/// When nothing is queued it answers like an empty table that accepts every
/// write: one affected row per statement of an `Execute`, no rows for a
/// `Query`, and `NULL` for a `Scalar`.
#[derive(Debug)]
pub struct LoggingConnection {
    /// Log of all operations executed through this connection
    ops_log: Arc<Mutex<Vec<DriverOp>>>,

    /// Responses to hand out, oldest first
    responses: Arc<Mutex<VecDeque<Result<Response>>>>,
}

impl LoggingConnection {
    pub fn new() -> Self {
        Self {
            ops_log: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Get a handle to the operations log and the response queue
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone(), self.responses.clone())
    }
}

impl Default for LoggingConnection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Connection for LoggingConnection {
    async fn exec(&mut self, operation: Operation) -> Result<Response> {
        let queued = self
            .responses
            .lock()
            .expect("Failed to acquire responses lock")
            .pop_front();

        let response = queued.unwrap_or_else(|| Ok(default_response(&operation)));

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(DriverOp {
                operation,
                response: response.clone(),
            });

        response
    }
}

fn default_response(operation: &Operation) -> Response {
    match operation {
        Operation::Execute(stmt) => Response::count(stmt.text.split(";\n").count() as u64),
        Operation::Query(_) => Response::empty_values(),
        Operation::Scalar(_) => Response::scalar(Value::Null),
    }
}
