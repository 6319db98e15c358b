//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a lexer handler for fixed-form tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token::new($kind, $value, $span)
    };
}

/// Creates a handler for a fixed-form token (punctuation or operator).
///
/// The generated handler emits a token of the given kind with an empty
/// value, spanning the matched spelling, and advances past it.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal spelling (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("\\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+="))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut $crate::lexer::lexer::Lexer,
         _matched: &str|
         -> Result<Option<$crate::lexer::tokens::Token>, $crate::errors::errors::Error> {
            let start = lexer.pos();
            let span = lexer.span(start, start + $value.len());
            lexer.advance_n($value.len());
            Ok(Some($crate::MK_TOKEN!($kind, String::new(), span)))
        }
    };
}
