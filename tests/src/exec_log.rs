use crate::DriverOp;

use quarry_core::{
    driver::{Operation, Response},
    stmt::{GeneratedStatement, Row},
    Error, Result,
};

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// A wrapper around the operations log that provides a clean API for tests
#[derive(Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
    responses: Arc<Mutex<VecDeque<Result<Response>>>>,
}

impl ExecLog {
    pub(crate) fn new(
        ops: Arc<Mutex<Vec<DriverOp>>>,
        responses: Arc<Mutex<VecDeque<Result<Response>>>>,
    ) -> Self {
        Self { ops, responses }
    }

    /// Queue the response to the next operation
    pub fn respond(&self, response: Response) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queue rows as the response to the next operation
    pub fn respond_rows(&self, rows: impl IntoIterator<Item = Row>) {
        self.respond(Response::values(rows.into_iter().collect::<Vec<_>>()));
    }

    /// Queue a failure as the response to the next operation
    pub fn fail(&self, err: Error) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Check if any operation matches the given predicate
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .any(|op| predicate(&op.operation))
    }

    /// Count operations matching the given predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Operation) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| predicate(&op.operation))
            .count()
    }

    /// Check if there's an Execute operation
    pub fn has_execute(&self) -> bool {
        self.any(Operation::is_execute)
    }

    /// Check if there's a Query operation
    pub fn has_query(&self) -> bool {
        self.any(Operation::is_query)
    }

    /// Check if there's a Scalar operation
    pub fn has_scalar(&self) -> bool {
        self.any(Operation::is_scalar)
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first operation from the log
    /// Returns None if the log is empty
    pub fn pop(&mut self) -> Option<(Operation, Result<Response>)> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            let driver_op = ops.remove(0);
            Some((driver_op.operation, driver_op.response))
        }
    }

    /// Remove the first operation and return its statement
    #[track_caller]
    pub fn pop_statement(&mut self) -> GeneratedStatement {
        let (operation, _) = self.pop().expect("no operation was logged");
        operation.into_statement()
    }

    /// Get access to all operations for custom assertions
    /// This is an escape hatch for complex assertions
    pub fn with_ops<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[DriverOp]) -> R,
    {
        let ops = self.ops.lock().unwrap();
        f(&ops)
    }
}
