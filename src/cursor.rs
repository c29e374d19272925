//! Indexed access to the decoded character sequence of a query string.

/// A read cursor over the characters of the input query.
///
/// The cursor owns the decoded input and a read position; all character
/// access in the lexer goes through [`get`](RuneCursor::get) and
/// [`peek`](RuneCursor::peek), never the raw index. `None` signals end of
/// input at this layer; the lexer decides whether that is a clean stop or
/// an error.
pub struct RuneCursor {
    input: Vec<char>,
    position: usize,
}

impl RuneCursor {
    pub fn new(input: &str) -> Self {
        RuneCursor {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Returns the character at the current position and advances by one.
    /// The position does not advance at end of input.
    pub fn get(&mut self) -> Option<char> {
        let ch = self.input.get(self.position).copied()?;
        self.position += 1;
        Some(ch)
    }

    /// Returns the character at the current position without advancing.
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_walks_the_input_in_order() {
        let mut cursor = RuneCursor::new("hello world");
        for expected in "hello world".chars() {
            assert_eq!(cursor.get(), Some(expected));
        }
        assert_eq!(cursor.get(), None);
    }

    #[test]
    fn get_is_stable_at_end_of_input() {
        let mut cursor = RuneCursor::new("h");
        assert_eq!(cursor.get(), Some('h'));
        for _ in 0..100 {
            assert_eq!(cursor.get(), None);
        }
    }

    #[test]
    fn peek_does_not_advance() {
        let mut cursor = RuneCursor::new("ab");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.get(), Some('a'));
        assert_eq!(cursor.peek(), Some('b'));
    }

    #[test]
    fn empty_input_is_immediately_exhausted() {
        let mut cursor = RuneCursor::new("");
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.get(), None);
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        let mut cursor = RuneCursor::new("héllo");
        assert_eq!(cursor.get(), Some('h'));
        assert_eq!(cursor.get(), Some('é'));
        assert_eq!(cursor.get(), Some('l'));
    }
}
