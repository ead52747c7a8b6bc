#![deny(warnings)]

/// A backtracking scanner over a borrowed string.
///
/// The scanner keeps two byte offsets into its source: the start of the
/// lexeme being built and the position right after the last accepted char.
/// Scan helpers advance `pos`, backtrack with `set_pos` when a partial match
/// fails, and finally `extract` everything accepted since the last `ignore`.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    src: &'a str,
    start: usize,
    pos: usize,
}

impl<'a> Iterator for Scanner<'a> {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Scanner<'a> {
        Scanner { src, start: 0, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    // only positions inside the current lexeme are valid backtrack targets
    pub fn set_pos(&mut self, pos: usize) -> bool {
        if pos < self.start || pos > self.src.len() || !self.src.is_char_boundary(pos) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Unconsumed input, starting right after the last accepted char.
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Byte offset of the lexeme being built.
    pub fn offset(&self) -> usize {
        self.start
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// What has been accepted since the last `ignore` or `extract`.
    pub fn view(&self) -> &'a str {
        &self.src[self.start..self.pos]
    }

    pub fn ignore(&mut self) {
        self.start = self.pos;
    }

    pub fn extract(&mut self) -> &'a str {
        let lexeme = self.view();
        self.ignore();
        lexeme
    }

    pub fn extract_string(&mut self) -> String {
        self.extract().to_string()
    }

    pub fn accept_char(&mut self, what: char) -> bool {
        if self.peek() == Some(what) {
            self.next();
            return true;
        }
        false
    }

    // Advance the scanner only if the next char is in the 'any' set
    pub fn accept_any_char(&mut self, any: &str) -> Option<char> {
        match self.peek() {
            Some(next) if any.contains(next) => self.next(),
            _ => None,
        }
    }

    // Skip over the 'over' set, result is if the scanner was advanced
    pub fn skip_all_chars(&mut self, over: &str) -> bool {
        let mut advanced = false;
        while self.accept_any_char(over).is_some() {
            advanced = true;
        }
        advanced
    }

    pub fn skip_ws(&mut self) -> bool {
        let mut advanced = false;
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.next();
            advanced = true;
        }
        advanced
    }

    // discard any leading whitespace and whatever was accepted before it
    pub fn ignore_ws(&mut self) {
        self.skip_ws();
        self.ignore();
    }
}
