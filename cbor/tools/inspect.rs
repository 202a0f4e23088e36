/*!
Inspect command - print an indented outline of CBOR items
*/

use super::io::{Input, Output};
use cbor_walk::decode::{self, Cursor, DEFAULT_MAX_RECURSION, Value, simple};
use clap::Parser;

/// Print an outline of CBOR items
#[derive(Parser, Debug)]
#[command(about = "Print an outline of CBOR items", long_about = None)]
pub struct Command {
    /// Treat the input as hex text rather than raw CBOR
    #[arg(long)]
    hex: bool,

    /// Outline every item of a CBOR sequence, not just the first
    #[arg(short, long)]
    sequence: bool,

    /// Maximum nesting depth of arrays and maps
    #[arg(long, default_value_t = DEFAULT_MAX_RECURSION, value_name = "DEPTH")]
    max_depth: usize,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<Output>,

    /// Input CBOR file (use '-' for stdin)
    input: Input,
}

impl Command {
    pub fn exec(self) -> anyhow::Result<()> {
        let data = self.input.read_cbor(self.hex)?;
        let mut cursor = Cursor::new(&data);
        let mut lines = Vec::new();

        let r = if self.sequence {
            let mut r = Ok(());
            while r.is_ok() && !cursor.is_empty() {
                r = outline(&mut cursor, 0, self.max_depth, &mut lines);
            }
            r
        } else {
            outline(&mut cursor, 0, self.max_depth, &mut lines)
        };

        // Whatever was decoded before an error is still worth showing
        let mut text = lines.join("\n");
        text.push('\n');
        self.output.unwrap_or(Output::Stdout).write_str(&text)?;

        r.map_err(|e| anyhow::anyhow!("Invalid CBOR at offset {}: {e}", cursor.offset()))
    }
}

/// Appends one line per item, children indented beneath their container
fn outline(
    cursor: &mut Cursor,
    indent: usize,
    max_recursion: usize,
    lines: &mut Vec<String>,
) -> Result<(), decode::Error> {
    let item = cursor.extract()?;
    let prefix = format!("{:06x}: {}", item.start, "  ".repeat(indent));
    match item.value {
        Value::Array(r) => {
            lines.push(format!("{prefix}Array ({})", r.length));
            children(cursor, r.length, 1, indent, max_recursion, lines)
        }
        Value::Map(r) => {
            lines.push(format!("{prefix}Map ({})", r.length));
            children(cursor, r.length, 2, indent, max_recursion, lines)
        }
        value => {
            lines.push(format!("{prefix}{}", format_leaf(&value)));
            Ok(())
        }
    }
}

fn children(
    cursor: &mut Cursor,
    count: u64,
    items_per_entry: usize,
    indent: usize,
    max_recursion: usize,
    lines: &mut Vec<String>,
) -> Result<(), decode::Error> {
    if max_recursion == 0 {
        return Err(decode::Error::MaxRecursion);
    }
    for _ in 0..count {
        for _ in 0..items_per_entry {
            outline(cursor, indent + 1, max_recursion - 1, lines)?;
        }
    }
    Ok(())
}

fn format_leaf(value: &Value) -> String {
    match value {
        Value::UnsignedInteger(n) => format!("{} {n}", value.type_name()),
        Value::SignedInteger(n) => format!("{} {n}", value.type_name()),
        Value::Bytes(b) => format!("{} h'{}'", value.type_name(), hex::encode(b)),
        Value::Text(t) => match std::str::from_utf8(t) {
            Ok(s) => format!("{} {s:?}", value.type_name()),
            Err(_) => format!("{} (invalid UTF-8) h'{}'", value.type_name(), hex::encode(t)),
        },
        Value::Simple(simple::FALSE) => "false".to_string(),
        Value::Simple(simple::TRUE) => "true".to_string(),
        Value::Simple(simple::NULL) => "null".to_string(),
        Value::Simple(simple::UNDEFINED) => "undefined".to_string(),
        Value::Simple(n) => format!("simple({n})"),
        Value::Array(r) => format!("Array ({})", r.length),
        Value::Map(r) => format!("Map ({})", r.length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline_all(data: &[u8]) -> (Vec<String>, Result<(), decode::Error>) {
        let mut cursor = Cursor::new(data);
        let mut lines = Vec::new();
        let r = outline(&mut cursor, 0, DEFAULT_MAX_RECURSION, &mut lines);
        (lines, r)
    }

    #[test]
    fn test_outline_nested() {
        let cbor = vec![0x82, 0xa1, 0x01, 0x02, 0x41, 0xff];
        let (lines, r) = outline_all(&cbor);
        assert!(r.is_ok());
        assert_eq!(
            lines,
            vec![
                "000000: Array (2)",
                "000001:   Map (1)",
                "000002:     Unsigned Integer 1",
                "000003:     Unsigned Integer 2",
                "000004:   Byte String h'ff'",
            ]
        );
    }

    #[test]
    fn test_outline_leaves() {
        assert_eq!(outline_all(&[0x20]).0, vec!["000000: Negative Integer -1"]);
        assert_eq!(
            outline_all(&[0x65, b'h', b'e', b'l', b'l', b'o']).0,
            vec!["000000: Text String \"hello\""]
        );
        assert_eq!(outline_all(&[0xf6]).0, vec!["000000: null"]);
    }

    #[test]
    fn test_outline_truncated() {
        let (lines, r) = outline_all(&[0x82, 0x01]);
        assert_eq!(r, Err(decode::Error::Overrun));
        assert_eq!(
            lines,
            vec!["000000: Array (2)", "000001:   Unsigned Integer 1"]
        );
    }
}
