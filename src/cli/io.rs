//! JSON output for one-shot commands

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    write_response_to(&mut stdout, data)
}

fn write_response_to<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *writer, &response)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_envelope() {
        let mut out = Vec::new();
        write_response_to(&mut out, serde_json::json!({"initialized": true})).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"data\":{\"initialized\":true},\"status\":\"ok\"}\n"
        );
    }
}
