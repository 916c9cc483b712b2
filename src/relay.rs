//! # Relay de Líneas
//! src/relay.rs
//!
//! Copia un origen línea por línea hacia un destino, sin transformar el
//! contenido. Las líneas se leen como bytes, así que el archivo no tiene que
//! ser UTF-8 válido.
//!
//! Reglas del wire format:
//! - Se quita el terminador de cada línea (`\n` o `\r\n`)
//! - Cada línea se escribe seguida de un único `\n`
//! - Se hace flush después de cada línea

use crate::error::{RelayError, Result};
use std::io::{BufRead, Write};

/// Resumen de una transferencia completa
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelayOutcome {
    /// Líneas enviadas
    pub lines: u64,
    /// Bytes escritos al destino (incluye los `\n`)
    pub bytes: u64,
}

/// Transmite todas las líneas de `reader` hacia `writer`
pub fn relay_lines<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<RelayOutcome> {
    let mut outcome = RelayOutcome::default();
    let mut line = Vec::with_capacity(256);

    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line).map_err(RelayError::ReadFile)?;
        if read == 0 {
            break;
        }

        let content = strip_terminator(&line);
        writer.write_all(content).map_err(RelayError::WriteClient)?;
        writer.write_all(b"\n").map_err(RelayError::WriteClient)?;
        writer.flush().map_err(RelayError::WriteClient)?;

        outcome.lines += 1;
        outcome.bytes += content.len() as u64 + 1;
    }

    Ok(outcome)
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    fn relay(input: &[u8]) -> (RelayOutcome, Vec<u8>) {
        let mut out = Vec::new();
        let outcome = relay_lines(Cursor::new(input.to_vec()), &mut out).unwrap();
        (outcome, out)
    }

    #[test]
    fn test_relay_json_lines() {
        let (outcome, out) = relay(b"{\"id\":1}\n{\"id\":2}\n");
        assert_eq!(out, b"{\"id\":1}\n{\"id\":2}\n");
        assert_eq!(outcome.lines, 2);
        assert_eq!(outcome.bytes, out.len() as u64);
    }

    #[test]
    fn test_relay_empty_input() {
        let (outcome, out) = relay(b"");
        assert!(out.is_empty());
        assert_eq!(outcome, RelayOutcome::default());
    }

    #[test]
    fn test_last_line_without_newline_gets_one() {
        let (outcome, out) = relay(b"alpha\nbeta");
        assert_eq!(out, b"alpha\nbeta\n");
        assert_eq!(outcome.lines, 2);
    }

    #[test]
    fn test_crlf_normalized() {
        let (_, out) = relay(b"one\r\ntwo\r\n");
        assert_eq!(out, b"one\ntwo\n");
    }

    #[test]
    fn test_blank_lines_preserved() {
        let (outcome, out) = relay(b"\n\nx\n");
        assert_eq!(out, b"\n\nx\n");
        assert_eq!(outcome.lines, 3);
    }

    #[test]
    fn test_non_utf8_passthrough() {
        let (_, out) = relay(b"\xff\xfe raw\n");
        assert_eq!(out, b"\xff\xfe raw\n");
    }

    /// Writer que cuenta los flush
    struct FlushCounter {
        data: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushCounter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_flush_per_line() {
        let mut sink = FlushCounter { data: Vec::new(), flushes: 0 };
        relay_lines(Cursor::new(b"a\nb\nc\n".to_vec()), &mut sink).unwrap();
        assert_eq!(sink.flushes, 3);
        assert_eq!(sink.data, b"a\nb\nc\n");
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "client gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_reported() {
        let result = relay_lines(Cursor::new(b"a\n".to_vec()), BrokenWriter);
        assert!(matches!(result, Err(RelayError::WriteClient(_))));
    }

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::InvalidData, "disk error"))
        }
    }

    #[test]
    fn test_read_error_reported() {
        let reader = io::BufReader::new(FailingReader);
        let result = relay_lines(reader, Vec::new());
        assert!(matches!(result, Err(RelayError::ReadFile(_))));
    }
}
