use super::decode::{Cursor, Error, Value};

/// Nesting depth accepted by callers that have no better idea.
pub const DEFAULT_MAX_RECURSION: usize = 16;

impl Cursor<'_> {
    /// Advances the cursor past one complete item, including all nested
    /// children.
    ///
    /// Every array or map entered consumes one level of `max_recursion`;
    /// entering a container with none left fails with
    /// [`Error::MaxRecursion`].
    pub fn skip(&mut self, max_recursion: usize) -> Result<(), Error> {
        let item = self.extract();
        if self.offset() > self.data().len() {
            return Err(Error::Overrun.raise());
        }
        match item?.value {
            Value::UnsignedInteger(_)
            | Value::SignedInteger(_)
            | Value::Bytes(_)
            | Value::Text(_)
            | Value::Simple(_) => Ok(()),
            Value::Array(r) => self.skip_children(r.length, 1, max_recursion),
            Value::Map(r) => self.skip_children(r.length, 2, max_recursion),
        }
    }

    fn skip_children(
        &mut self,
        count: u64,
        items_per_entry: usize,
        max_recursion: usize,
    ) -> Result<(), Error> {
        if max_recursion == 0 {
            return Err(Error::MaxRecursion.raise());
        }
        for _ in 0..count {
            for _ in 0..items_per_entry {
                self.skip(max_recursion - 1)?;
            }
        }
        Ok(())
    }

    /// Skips items until the buffer is exhausted, returning how many were
    /// skipped.
    pub fn skip_sequence(&mut self, max_recursion: usize) -> Result<usize, Error> {
        let mut count = 0;
        while !self.is_empty() {
            self.skip(max_recursion)?;
            count += 1;
        }
        Ok(count)
    }
}

/// Skips the single item at the start of `data`, returning its encoded length.
pub fn skip_value(data: &[u8], max_recursion: usize) -> Result<usize, Error> {
    let mut cursor = Cursor::new(data);
    cursor.skip(max_recursion)?;
    Ok(cursor.offset())
}
