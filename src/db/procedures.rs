// src/db/procedures.rs
//
// Store-side procedures for services
//
// SQLite has no stored procedures, so the service mutations are registered
// here as named operations with a fixed arity. They run on the caller's
// connection, inside the caller's transaction, and keep the audit trail in
// step with the data. Callers only ever refer to them by name and positional
// arguments.

use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{params, Connection};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredProcedure {
    /// sp_registrar_servicio(usuario_id, nombre, precio)
    RegistrarServicio,
    /// sp_editar_servicio(usuario_id, id, nombre, precio)
    EditarServicio,
    /// sp_eliminar_servicio(usuario_id, id)
    EliminarServicio,
}

impl StoredProcedure {
    pub fn name(self) -> &'static str {
        match self {
            StoredProcedure::RegistrarServicio => "sp_registrar_servicio",
            StoredProcedure::EditarServicio => "sp_editar_servicio",
            StoredProcedure::EliminarServicio => "sp_eliminar_servicio",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            StoredProcedure::RegistrarServicio => 3,
            StoredProcedure::EditarServicio => 4,
            StoredProcedure::EliminarServicio => 2,
        }
    }

    /// Execute the procedure and return the number of `servicios` rows it
    /// affected.
    pub fn call(self, conn: &Connection, args: &[Value]) -> AppResult<usize> {
        if args.len() != self.arity() {
            return Err(AppError::Procedure(format!(
                "{} expects {} arguments, got {}",
                self.name(),
                self.arity(),
                args.len()
            )));
        }

        log::debug!("CALL {}({} args)", self.name(), args.len());

        let args = Args { procedure: self, values: args };
        let usuario_id = args.integer(0)?;

        match self {
            StoredProcedure::RegistrarServicio => {
                let rows = conn.execute(
                    "INSERT INTO servicios (nombre, precio) VALUES (?1, ?2)",
                    params![args.text(1)?, args.real(2)?],
                )?;
                let servicio_id = conn.last_insert_rowid();
                record_audit(conn, usuario_id, "registrar", servicio_id)?;
                Ok(rows)
            }
            StoredProcedure::EditarServicio => {
                let servicio_id = args.integer(1)?;
                let rows = conn.execute(
                    "UPDATE servicios SET nombre = ?1, precio = ?2 WHERE id = ?3",
                    params![args.text(2)?, args.real(3)?, servicio_id],
                )?;
                if rows > 0 {
                    record_audit(conn, usuario_id, "editar", servicio_id)?;
                }
                Ok(rows)
            }
            StoredProcedure::EliminarServicio => {
                let servicio_id = args.integer(1)?;
                let rows = conn.execute("DELETE FROM servicios WHERE id = ?1", [servicio_id])?;
                if rows > 0 {
                    record_audit(conn, usuario_id, "eliminar", servicio_id)?;
                }
                Ok(rows)
            }
        }
    }
}

impl std::fmt::Display for StoredProcedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn record_audit(conn: &Connection, usuario_id: i64, accion: &str, servicio_id: i64) -> AppResult<()> {
    conn.execute(
        "INSERT INTO servicio_auditoria (usuario_id, accion, servicio_id, registrado_en)
         VALUES (?1, ?2, ?3, ?4)",
        params![usuario_id, accion, servicio_id, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Positional argument access with typed errors
struct Args<'a> {
    procedure: StoredProcedure,
    values: &'a [Value],
}

impl Args<'_> {
    fn integer(&self, index: usize) -> AppResult<i64> {
        match &self.values[index] {
            Value::Integer(i) => Ok(*i),
            other => Err(self.mismatch(index, "integer", other)),
        }
    }

    fn real(&self, index: usize) -> AppResult<f64> {
        match &self.values[index] {
            Value::Real(r) => Ok(*r),
            Value::Integer(i) => Ok(*i as f64),
            other => Err(self.mismatch(index, "real", other)),
        }
    }

    fn text(&self, index: usize) -> AppResult<&str> {
        match &self.values[index] {
            Value::Text(s) => Ok(s.as_str()),
            other => Err(self.mismatch(index, "text", other)),
        }
    }

    fn mismatch(&self, index: usize, expected: &str, got: &Value) -> AppError {
        AppError::Procedure(format!(
            "{}: argument {} must be {}, got {:?}",
            self.procedure.name(),
            index + 1,
            expected,
            got.data_type()
        ))
    }
}
