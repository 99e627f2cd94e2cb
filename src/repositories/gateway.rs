// src/repositories/gateway.rs
//
// Data-access gateway
//
// The one capability both repositories are built on. An Operation is either
// a direct statement or a stored-procedure call; the gateway runs it on a
// fresh connection inside a single transaction and turns whatever happens
// into a MutationOutcome. Reads collapse faults to empty results.
//
// RULES:
// - One connection per call, released before returning
// - Commit only after the row expectation holds
// - Roll back on every failure path
// - No fault escapes as an error value

use std::sync::Arc;

use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};

use crate::db::{ConnectionFactory, FlagEncoding, StoredProcedure};
use crate::error::{AppError, AppResult};
use crate::repositories::MutationOutcome;

/// A single unit of work against the store
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Parameterized SQL, parameters bound positionally
    Statement {
        sql: &'static str,
        params: Vec<Value>,
    },
    /// Named store-side procedure with positional arguments
    Procedure {
        procedure: StoredProcedure,
        args: Vec<Value>,
    },
}

impl Operation {
    fn execute(&self, conn: &Connection) -> AppResult<usize> {
        match self {
            Operation::Statement { sql, params } => {
                Ok(conn.execute(sql, params_from_iter(params.iter()))?)
            }
            Operation::Procedure { procedure, args } => procedure.call(conn, args),
        }
    }
}

/// What the affected-row count must look like for a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowExpectation {
    /// Commit whatever the count
    Any,
    /// Zero rows rolls back and reports NotFound
    AtLeastOne,
}

#[derive(Debug, Clone)]
pub struct Gateway {
    factory: Arc<ConnectionFactory>,
}

impl Gateway {
    pub fn new(factory: Arc<ConnectionFactory>) -> Self {
        Self { factory }
    }

    pub fn flag_encoding(&self) -> FlagEncoding {
        self.factory.flag_encoding()
    }

    /// Run a mutation. `label` names the operation in the log.
    pub fn mutate(&self, label: &str, operation: Operation, expect: RowExpectation) -> MutationOutcome {
        match self.try_mutate(label, &operation, expect) {
            Ok(outcome) => outcome,
            Err(e) => Self::fault_outcome(label, e),
        }
    }

    fn try_mutate(
        &self,
        label: &str,
        operation: &Operation,
        expect: RowExpectation,
    ) -> AppResult<MutationOutcome> {
        let mut conn = self.factory.connect()?;
        let tx = conn.transaction()?;

        let rows = match operation.execute(&tx) {
            Ok(rows) => rows,
            Err(e) => {
                if let Err(rollback) = tx.rollback() {
                    log::warn!("{}: rollback failed: {}", label, rollback);
                }
                return Err(e);
            }
        };

        if expect == RowExpectation::AtLeastOne && rows == 0 {
            tx.rollback()?;
            log::info!("{}: no rows affected, rolled back", label);
            return Ok(MutationOutcome::NotFound);
        }

        tx.commit()?;
        log::info!("{}: committed ({} rows)", label, rows);
        Ok(MutationOutcome::Applied { rows })
    }

    fn fault_outcome(label: &str, error: AppError) -> MutationOutcome {
        if error.is_integrity_violation() {
            log::warn!("{}: integrity violation: {}", label, error);
            MutationOutcome::Conflict(error.to_string())
        } else if error.is_store_fault() {
            log::error!("{}: store fault: {}", label, error);
            MutationOutcome::StoreFault(error.to_string())
        } else {
            log::error!("{}: unexpected fault: {}", label, error);
            MutationOutcome::StoreFault(error.to_string())
        }
    }

    /// Run a query and map every row. Any fault yields an empty Vec.
    pub fn fetch_all<T, F>(&self, label: &str, sql: &str, params: &[Value], map: F) -> Vec<T>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        match self.try_fetch_all(sql, params, map) {
            Ok(rows) => {
                log::debug!("{}: {} rows", label, rows.len());
                rows
            }
            Err(e) => {
                log::error!("{}: query failed: {}", label, e);
                Vec::new()
            }
        }
    }

    fn try_fetch_all<T, F>(&self, sql: &str, params: &[Value], map: F) -> AppResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.factory.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt
            .query_map(params_from_iter(params.iter()), map)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Run a query expected to match at most one row. Any fault yields None.
    pub fn fetch_optional<T, F>(&self, label: &str, sql: &str, params: &[Value], map: F) -> Option<T>
    where
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        match self.try_fetch_optional(sql, params, map) {
            Ok(found) => found,
            Err(e) => {
                log::error!("{}: query failed: {}", label, e);
                None
            }
        }
    }

    fn try_fetch_optional<T, F>(&self, sql: &str, params: &[Value], map: F) -> AppResult<Option<T>>
    where
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.factory.connect()?;
        let found = conn
            .query_row(sql, params_from_iter(params.iter()), map)
            .optional()?;
        Ok(found)
    }
}
