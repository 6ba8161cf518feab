//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct, the rune source the
//! sub-scanners are built on. It yields one character at a time,
//! supports exactly one character of pushback, and tracks line/column
//! information for error reporting.

/// A cursor for traversing source code character by character.
///
/// The cursor wraps the source text and hands out characters one at a
/// time. Several token shapes are negatively identified by reading the
/// first character that is *not* part of the token, so the cursor keeps
/// a one-slot pushback buffer: [`put_back`](Cursor::put_back) returns
/// the most recently read character so the next
/// [`next_char`](Cursor::next_char) yields it again. The grammar never
/// needs more than one slot.
///
/// # Example
///
/// ```
/// use scrawl_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.next_char(), Some('a'));
/// let b = cursor.next_char().unwrap();
/// cursor.put_back(b);
/// assert_eq!(cursor.next_char(), Some('b'));
/// assert_eq!(cursor.next_char(), None);
/// ```
pub struct Cursor<'a> {
    /// Remaining characters of the source.
    chars: std::str::Chars<'a>,

    /// One-slot pushback buffer.
    pending: Option<char>,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,

    /// Position/line/column before the most recent read, so that a
    /// pushback can restore them.
    before_last: (usize, u32, u32),
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars(),
            pending: None,
            position: 0,
            line: 1,
            column: 1,
            before_last: (0, 1, 1),
        }
    }

    /// Returns the next character, or `None` at end of input.
    ///
    /// Advances byte position and line/column tracking. A character
    /// previously handed to [`put_back`](Cursor::put_back) is returned
    /// before the underlying source is consulted again.
    pub fn next_char(&mut self) -> Option<char> {
        let c = match self.pending.take() {
            Some(c) => c,
            None => self.chars.next()?,
        };

        self.before_last = (self.position, self.line, self.column);
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Returns the most recently read character to the cursor.
    ///
    /// The next call to [`next_char`](Cursor::next_char) yields `c`
    /// again, and position/line/column are rewound to where they were
    /// before `c` was read. Calling this twice without an intervening
    /// read is a programming error.
    pub fn put_back(&mut self, c: char) {
        debug_assert!(self.pending.is_none(), "cursor supports one pushback slot");
        self.pending = Some(c);
        let (position, line, column) = self.before_last;
        self.position = position;
        self.line = line;
        self.column = column;
    }

    /// Returns true if the cursor has no more characters to yield.
    ///
    /// # Example
    ///
    /// ```
    /// use scrawl_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert!(!cursor.is_at_end());
    /// cursor.next_char();
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn is_at_end(&self) -> bool {
        self.pending.is_none() && self.chars.as_str().is_empty()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }
}
