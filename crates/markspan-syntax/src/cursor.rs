/// Tokenizer position within a [`SourceBuffer`](crate::source::SourceBuffer).
///
/// `row` and `col` index the line records; `offset` counts characters from
/// the start of the buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
    pub offset: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step one character forward in a row holding `row_len` characters.
    ///
    /// At the last column of the row the cursor wraps to column 0 of the next
    /// row; otherwise the column increments. The offset always increments.
    pub fn step(&mut self, row_len: usize) {
        if self.col + 1 >= row_len {
            self.row += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        self.offset += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        let cur = Cursor::new();
        assert_eq!((cur.row, cur.col, cur.offset), (0, 0, 0));
    }

    #[test]
    fn step_within_row() {
        let mut cur = Cursor::new();
        cur.step(3);
        assert_eq!((cur.row, cur.col, cur.offset), (0, 1, 1));
    }

    #[test]
    fn step_wraps_at_last_column() {
        let mut cur = Cursor::new();
        cur.step(2);
        cur.step(2);
        assert_eq!((cur.row, cur.col, cur.offset), (1, 0, 2));
    }

    #[test]
    fn single_char_row_wraps_immediately() {
        let mut cur = Cursor::new();
        cur.step(1);
        assert_eq!((cur.row, cur.col, cur.offset), (1, 0, 1));
    }
}
