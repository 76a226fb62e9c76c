use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

use crate::core::error::AnalysisError;
use crate::shared::constants;

/// Compact single-line JSON with `", "` and `": "` separators, the layout the
/// consuming server already parses.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

pub fn to_line<T: Serialize>(value: &T) -> Result<String, AnalysisError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `value` as one JSON line and flush.
pub fn emit<T: Serialize, W: Write>(out: &mut W, value: &T) -> Result<(), AnalysisError> {
    let line = to_line(value)?;
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct ErrorDocument<'a> {
    error: &'a str,
}

pub fn emit_error<W: Write>(out: &mut W, message: &str) -> Result<(), AnalysisError> {
    emit(out, &ErrorDocument { error: message })
}

pub fn emit_missing_arguments<W: Write>(out: &mut W) -> Result<(), AnalysisError> {
    emit_error(out, constants::MISSING_ARGUMENTS_MESSAGE)
}
