use std::{iter::FusedIterator, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{lookup_keyword, Token, TokenKind};

/// Emits a token, or `None` when the matched text is skipped.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        // Patterns are anchored so a match can only start at the cursor.
        let regex = Regex::new(&format!("^(?:{})", pattern))
            .unwrap_or_else(|err| panic!("invalid token pattern {:?}: {}", pattern, err));

        RegexPattern { regex, handler }
    }
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("[0-9]+(\\.[0-9]+)?", number_handler),
        RegexPattern::new("[ \\t\\r\\n]+", skip_handler),
        RegexPattern::new("\"", string_handler),
        RegexPattern::new("//[^\\n]*", skip_handler),
        RegexPattern::new("\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        RegexPattern::new("\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        RegexPattern::new("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        RegexPattern::new("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new("!", MK_DEFAULT_HANDLER!(TokenKind::Not, "!")),
        RegexPattern::new("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new("<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        RegexPattern::new("<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        RegexPattern::new(">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new("\\|\\|", MK_DEFAULT_HANDLER!(TokenKind::Or, "||")),
        RegexPattern::new("&&", MK_DEFAULT_HANDLER!(TokenKind::And, "&&")),
        RegexPattern::new("\\.\\.", MK_DEFAULT_HANDLER!(TokenKind::DotDot, "..")),
        RegexPattern::new("\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        RegexPattern::new(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new(":", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        RegexPattern::new("\\?", MK_DEFAULT_HANDLER!(TokenKind::Question, "?")),
        RegexPattern::new(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new("\\+\\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++")),
        RegexPattern::new("--", MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--")),
        RegexPattern::new("\\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=")),
        RegexPattern::new("-=", MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=")),
        RegexPattern::new("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
    ];

    static ref MALFORMED_NUMBER_TAIL: Regex = Regex::new("^(?:\\.[0-9]+)+")
        .unwrap_or_else(|err| panic!("invalid number tail pattern: {}", err));
}

/// Single-pass scanner over one source unit.
///
/// The lexer is also an iterator: it yields every token up to and
/// including `EOF`, or up to and including the first error, and then
/// stops for good.
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
    trivia: Option<Vec<Span>>,
    emitted: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
            trivia: None,
            emitted: 0,
            finished: false,
        }
    }

    /// Keeps the spans of skipped whitespace and comment runs, readable
    /// through [`Lexer::trivia`]. Off by default so a lazy run holds no
    /// per-token state.
    pub fn record_trivia(mut self) -> Self {
        self.trivia = Some(vec![]);
        self
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Offsets past `u32::MAX` never reach here: oversized sources are
    /// rejected before scanning.
    pub fn position_at(&self, offset: usize) -> Position {
        Position(
            u32::try_from(offset).unwrap_or(u32::MAX),
            Rc::clone(&self.file),
        )
    }

    pub fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: self.position_at(start),
            end: self.position_at(end),
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Skipped whitespace and comment runs, in source order. Empty unless
    /// the lexer was built with [`Lexer::record_trivia`].
    pub fn trivia(&self) -> &[Span] {
        self.trivia.as_deref().unwrap_or(&[])
    }

    /// Scans the next token.
    ///
    /// Once `EOF` or an error has been returned the lexer does not move;
    /// calling again repeats that result.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if let Err(error) = check_source_len(self.source.len()) {
            return Err(self.fail(error, 0));
        }

        loop {
            if self.at_eof() {
                self.finished = true;
                debug!(file = %self.file, tokens = self.emitted, "tokenized source");
                return Ok(MK_TOKEN!(
                    TokenKind::EOF,
                    String::new(),
                    self.span(self.pos, self.pos)
                ));
            }

            let remaining = self.remainder();
            let mut longest: Option<(&RegexPattern, usize)> = None;

            // Every pattern is tried; the longest match wins and ties go to
            // the earlier entry.
            for pattern in PATTERNS.iter() {
                if let Some(found) = pattern.regex.find(remaining) {
                    let len = found.end();
                    if len > longest.map_or(0, |(_, best)| best) {
                        longest = Some((pattern, len));
                    }
                }
            }

            let Some((pattern, len)) = longest else {
                let character = self.at().unwrap_or_default();
                return Err(self.fail(ErrorImpl::InvalidCharacter { character }, self.pos));
            };

            let matched = remaining[..len].to_owned();
            match (pattern.handler)(self, &matched) {
                Ok(Some(token)) => {
                    trace!(kind = %token.kind(), offset = token.span().start.0, "token");
                    self.emitted += 1;
                    return Ok(token);
                }
                Ok(None) => continue,
                Err(err) => {
                    self.finished = true;
                    debug!(file = %self.file, error = %err, "tokenization aborted");
                    return Err(err);
                }
            }
        }
    }

    fn fail(&mut self, error: ErrorImpl, offset: usize) -> Error {
        let err = Error::new(error, self.position_at(offset));
        self.finished = true;
        debug!(file = %self.file, error = %err, "tokenization aborted");
        err
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        Some(self.next_token())
    }
}

impl FusedIterator for Lexer {}

/// Positions hold `u32` offsets, so longer sources cannot be scanned.
fn check_source_len(len: usize) -> Result<(), ErrorImpl> {
    match u32::try_from(len) {
        Ok(_) => Ok(()),
        Err(_) => Err(ErrorImpl::SourceTooLarge { len }),
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let start = lexer.pos;
    let end = start + matched.len();

    // `1.2.3`: a second fractional part directly after the first.
    if matched.contains('.') {
        if let Some(tail) = MALFORMED_NUMBER_TAIL.find(&lexer.source[end..]) {
            let literal = lexer.source[start..end + tail.end()].to_string();
            return Err(Error::new(
                ErrorImpl::MalformedNumber { literal },
                lexer.position_at(start),
            ));
        }
    }

    let token = MK_TOKEN!(TokenKind::Number, matched.to_string(), lexer.span(start, end));
    lexer.advance_n(matched.len());
    Ok(Some(token))
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let span = lexer.span(lexer.pos, lexer.pos + matched.len());
    if let Some(trivia) = lexer.trivia.as_mut() {
        trivia.push(span);
    }
    lexer.advance_n(matched.len());
    Ok(None)
}

fn string_handler(lexer: &mut Lexer, _matched: &str) -> Result<Option<Token>, Error> {
    let start = lexer.pos;

    let Some((value, len)) = scan_string(&lexer.source[start + 1..]) else {
        return Err(Error::new(
            ErrorImpl::UnterminatedString,
            lexer.position_at(start),
        ));
    };

    // Opening quote, body, closing quote.
    let end = start + 1 + len;
    let token = MK_TOKEN!(TokenKind::String, value, lexer.span(start, end));
    lexer.advance_n(end - start);
    Ok(Some(token))
}

/// Decodes a string body that starts right after the opening quote.
///
/// Returns the decoded content and the number of bytes consumed including
/// the closing quote, or `None` if the input ends first.
fn scan_string(body: &str) -> Option<(String, usize)> {
    let mut result = String::new();
    let mut chars = body.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        match ch {
            '"' => return Some((result, index + 1)),
            '\\' => {
                let &(_, next_ch) = chars.peek()?;
                match next_ch {
                    'n' => {
                        result.push('\n');
                        chars.next();
                    }
                    't' => {
                        result.push('\t');
                        chars.next();
                    }
                    '\\' => {
                        result.push('\\');
                        chars.next();
                    }
                    'r' => {
                        result.push('\r');
                        chars.next();
                    }
                    '"' => {
                        result.push('"');
                        chars.next();
                    }
                    '0' => {
                        result.push('\0');
                        chars.next();
                    }
                    'x' => {
                        let mut hex = String::new();
                        chars.next();

                        while hex.len() < 2 {
                            match chars.peek() {
                                Some(&(_, digit)) if digit.is_ascii_hexdigit() => {
                                    hex.push(digit);
                                    chars.next();
                                }
                                _ => break,
                            }
                        }

                        match u8::from_str_radix(&hex, 16) {
                            Ok(byte) => result.push(byte as char),
                            Err(_) => result.push_str("\\x"),
                        }
                    }
                    _ => {
                        result.push(ch); // Keep the backslash
                    }
                }
            }
            _ => result.push(ch),
        }
    }

    None
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<Option<Token>, Error> {
    let span = lexer.span(lexer.pos, lexer.pos + matched.len());

    let token = if let Some(kind) = lookup_keyword(matched) {
        MK_TOKEN!(kind, String::new(), span)
    } else {
        MK_TOKEN!(TokenKind::Identifier, matched.to_string(), span)
    };

    lexer.advance_n(matched.len());
    Ok(Some(token))
}

/// Tokenizes a whole source unit.
///
/// `file` names the unit in positions and defaults to `"shell"`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source, file).collect()
}
