use std::io::{self, Write};

use serde::Serialize;

use crate::error::AppResult;

pub fn print<T: Serialize>(value: &T) -> AppResult<()> {
    write(io::stdout().lock(), value)
}

pub fn write<W: Write, T: Serialize>(mut out: W, value: &T) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
