use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("const", TokenKind::Const);
        map.insert("class", TokenKind::Class);
        map.insert("new", TokenKind::New);
        map.insert("import", TokenKind::Import);
        map.insert("from", TokenKind::From);
        map.insert("fn", TokenKind::Fn);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("foreach", TokenKind::Foreach);
        map.insert("while", TokenKind::While);
        map.insert("for", TokenKind::For);
        map.insert("export", TokenKind::Export);
        map.insert("typeof", TokenKind::Typeof);
        map.insert("in", TokenKind::In);
        map
    };
}

/// Looks up a reserved word. `None` means `text` is an ordinary identifier.
pub fn lookup_keyword(text: &str) -> Option<TokenKind> {
    RESERVED_LOOKUP.get(text).copied()
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    DotDot,
    Semicolon,
    Colon,
    Question,
    Comma,

    PlusPlus,
    MinusMinus,
    PlusEquals,
    MinusEquals,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Let,
    Const,
    Class,
    New,
    Import,
    From,
    Fn,
    If,
    Else,
    Foreach,
    While,
    For,
    Export,
    Typeof,
    In,
}

impl TokenKind {
    /// Name used by the token dump.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EOF => "eof",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenBracket => "open_bracket",
            TokenKind::CloseBracket => "close_bracket",
            TokenKind::OpenCurly => "open_curly",
            TokenKind::CloseCurly => "close_curly",
            TokenKind::OpenParen => "open_paren",
            TokenKind::CloseParen => "close_paren",
            TokenKind::Assignment => "assignment",
            TokenKind::Equals => "equals",
            TokenKind::Not => "not",
            TokenKind::NotEquals => "not_equals",
            TokenKind::Less => "less",
            TokenKind::LessEquals => "less_equals",
            TokenKind::Greater => "greater",
            TokenKind::GreaterEquals => "greater_equals",
            TokenKind::Or => "or",
            TokenKind::And => "and",
            TokenKind::Dot => "dot",
            TokenKind::DotDot => "dot_dot",
            TokenKind::Semicolon => "semi_colon",
            TokenKind::Colon => "colon",
            TokenKind::Question => "question",
            TokenKind::Comma => "comma",
            TokenKind::PlusPlus => "plus_plus",
            TokenKind::MinusMinus => "minus_minus",
            TokenKind::PlusEquals => "plus_equals",
            TokenKind::MinusEquals => "minus_equals",
            TokenKind::Plus => "plus",
            TokenKind::Dash => "dash",
            TokenKind::Slash => "slash",
            TokenKind::Star => "star",
            TokenKind::Percent => "percent",
            TokenKind::Let => "let",
            TokenKind::Const => "const",
            TokenKind::Class => "class",
            TokenKind::New => "new",
            TokenKind::Import => "import",
            TokenKind::From => "from",
            TokenKind::Fn => "fn",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Foreach => "foreach",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Export => "export",
            TokenKind::Typeof => "typeof",
            TokenKind::In => "in",
        }
    }

    /// The one surface spelling of a fixed-form kind.
    pub fn spelling(self) -> Option<&'static str> {
        let spelling = match self {
            TokenKind::EOF | TokenKind::Number | TokenKind::String | TokenKind::Identifier => {
                return None
            }
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Or => "||",
            TokenKind::And => "&&",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Comma => ",",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::PlusEquals => "+=",
            TokenKind::MinusEquals => "-=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Percent => "%",
            // Keywords are spelled exactly like their name.
            keyword => keyword.name(),
        };

        Some(spelling)
    }

    pub fn has_payload(self) -> bool {
        matches!(
            self,
            TokenKind::Number | TokenKind::String | TokenKind::Identifier
        )
    }

    pub fn is_keyword(self) -> bool {
        self >= TokenKind::Let
    }

    /// Kinds a `BinaryExpr` may carry as its operator: arithmetic,
    /// comparison, logical and assignment forms.
    pub fn is_binary_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Dash
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Greater
                | TokenKind::GreaterEquals
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Assignment
                | TokenKind::PlusEquals
                | TokenKind::MinusEquals
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A lexical unit. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    value: String,
    span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.debug_line())
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: String, span: Span) -> Self {
        Token { kind, value, span }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// `"<kind> (<value>)"`, with an empty payload for fixed-form kinds.
    pub fn debug_line(&self) -> String {
        if self.kind.has_payload() {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }

    pub fn debug(&self) {
        println!("{}", self.debug_line());
    }
}
