/*!
Skip command - measure CBOR items without decoding their contents
*/

use super::io::Input;
use cbor_walk::decode::{Cursor, DEFAULT_MAX_RECURSION};
use clap::Parser;

/// Skip over CBOR items and report their size
#[derive(Parser, Debug)]
#[command(about = "Skip over CBOR items and report their size", long_about = None)]
pub struct Command {
    /// Treat the input as hex text rather than raw CBOR
    #[arg(long)]
    hex: bool,

    /// Skip every item of a CBOR sequence, not just the first
    #[arg(short, long)]
    sequence: bool,

    /// Fail if anything follows the first item
    #[arg(long, conflicts_with = "sequence")]
    strict: bool,

    /// Maximum nesting depth of arrays and maps
    #[arg(long, default_value_t = DEFAULT_MAX_RECURSION, value_name = "DEPTH")]
    max_depth: usize,

    /// Input CBOR file (use '-' for stdin)
    input: Input,
}

impl Command {
    pub fn exec(self) -> anyhow::Result<()> {
        let data = self.input.read_cbor(self.hex)?;
        let mut cursor = Cursor::new(&data);

        if self.sequence {
            let count = cursor.skip_sequence(self.max_depth).map_err(|e| {
                anyhow::anyhow!("Invalid CBOR at offset {}: {e}", cursor.offset())
            })?;
            println!("{count} items, {} bytes", cursor.offset());
            return Ok(());
        }

        cursor
            .skip(self.max_depth)
            .map_err(|e| anyhow::anyhow!("Invalid CBOR at offset {}: {e}", cursor.offset()))?;

        let trailing = cursor.remaining().len();
        println!("{} bytes, {trailing} trailing", cursor.offset());
        if self.strict && trailing != 0 {
            anyhow::bail!("{trailing} bytes follow the first item");
        }
        Ok(())
    }
}
