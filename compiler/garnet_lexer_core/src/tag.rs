//! Token kind enumeration.
//!
//! [`TokenKind`] is a closed, `#[repr(u8)]` enumeration with discriminants
//! grouped into ranges so related kinds stay together:
//!
//! | Range    | Group                                  |
//! |----------|----------------------------------------|
//! | 0-7      | Sentinels and line structure           |
//! | 8-15     | Numeric literals                       |
//! | 16-23    | String and heredoc fragments           |
//! | 24-31    | Identifiers and variables              |
//! | 32-47    | Brackets and delimiters                |
//! | 48-79    | Operators and operator methods         |
//! | 80-95    | Assignment operators                   |
//! | 128-169  | Keywords                               |
//!
//! Kinds with fixed text report it through [`TokenKind::lexeme`]. Kinds whose
//! text varies (identifiers, numbers, strings) carry a literal view on the
//! token instead.

use std::fmt;

/// Token kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // ─── Sentinels & line structure (0-7) ──────────────────────────────
    /// Internal production for skipped input. Never returned by the scanner.
    Continue = 0,
    /// Malformed input. An error is recorded alongside.
    Illegal = 1,
    /// End of input (physical end or `__END__`).
    EndOfInput = 2,
    /// `\n` or `;`.
    NewLine = 3,

    // ─── Numeric literals (8-15) ───────────────────────────────────────
    DecimalInteger = 8,
    BinaryInteger = 9,
    OctalInteger = 10,
    HexadecimalInteger = 11,
    Float = 12,

    // ─── Strings & heredocs (16-23) ────────────────────────────────────
    /// Complete string literal, or the final fragment of an interpolated one.
    String = 16,
    /// String fragment before an interpolation.
    StringPart = 17,
    /// `<<ID` opener.
    HeredocBegin = 18,
    /// Heredoc body fragment before an interpolation.
    HeredocPart = 19,
    /// Final heredoc body fragment.
    HeredocEnd = 20,
    /// `#{`
    InsertBegin = 21,
    /// `}` closing an interpolation.
    InsertEnd = 22,

    // ─── Identifiers & variables (24-31) ───────────────────────────────
    LocalVarIdent = 24,
    /// Local name ending in `?`, `!`, or `=` in method-name position.
    LocalMethodIdent = 25,
    GlobalVarIdent = 26,
    InstanceVarIdent = 27,
    ClassVarIdent = 28,
    ConstIdent = 29,

    // ─── Brackets & delimiters (32-47) ─────────────────────────────────
    LParen = 32,
    RParen = 33,
    LBracket = 34,
    RBracket = 35,
    LBrace = 36,
    RBrace = 37,
    Colon2 = 38,
    Comma = 39,
    Dot = 40,
    Dot2 = 41,
    Dot3 = 42,
    Question = 43,
    Colon = 44,
    Arrow = 45,

    // ─── Operators (48-79) ─────────────────────────────────────────────
    Not = 48,
    NotEqual = 49,
    NotMatch = 50,
    AndOperator = 51,
    OrOperator = 52,
    Xor = 53,
    Amp = 54,
    Or = 55,
    Compare = 56,
    Eq = 57,
    Eql = 58,
    Match = 59,
    Gt = 60,
    GtEq = 61,
    Lt = 62,
    LtEq = 63,
    LShift = 64,
    RShift = 65,
    Plus = 66,
    Minus = 67,
    Mul = 68,
    Div = 69,
    Mod = 70,
    Pow = 71,
    Invert = 72,
    UnaryPlus = 73,
    UnaryMinus = 74,
    ElementRef = 75,
    ElementSet = 76,

    // ─── Assignment (80-95) ────────────────────────────────────────────
    Assign = 80,
    AssignAndOperator = 81,
    AssignOrOperator = 82,
    AssignXor = 83,
    AssignAnd = 84,
    AssignOr = 85,
    AssignLShift = 86,
    AssignRShift = 87,
    AssignPlus = 88,
    AssignMinus = 89,
    AssignMul = 90,
    AssignDiv = 91,
    AssignMod = 92,
    AssignPow = 93,

    // ─── Keywords (128-169) ────────────────────────────────────────────
    KeywordLine = 128,
    KeywordEncoding = 129,
    KeywordFile = 130,
    KeywordBeginBlock = 131,
    KeywordEndBlock = 132,
    KeywordAlias = 133,
    KeywordAnd = 134,
    KeywordBegin = 135,
    KeywordBreak = 136,
    KeywordCase = 137,
    KeywordClass = 138,
    KeywordDef = 139,
    KeywordDefined = 140,
    KeywordDo = 141,
    KeywordElse = 142,
    KeywordElsif = 143,
    KeywordEnd = 144,
    KeywordEnsure = 145,
    KeywordFor = 146,
    KeywordFalse = 147,
    KeywordIf = 148,
    KeywordIn = 149,
    KeywordModule = 150,
    KeywordNext = 151,
    KeywordNil = 152,
    KeywordNot = 153,
    KeywordOr = 154,
    KeywordRedo = 155,
    KeywordRescue = 156,
    KeywordRetry = 157,
    KeywordReturn = 158,
    KeywordSelf = 159,
    KeywordSuper = 160,
    KeywordThen = 161,
    KeywordTrue = 162,
    KeywordUndef = 163,
    KeywordUnless = 164,
    KeywordUntil = 165,
    KeywordWhen = 166,
    KeywordWhile = 167,
    KeywordYield = 168,
}

/// Generates the fixed-text tables: `lexeme()` returns the bare text,
/// `fixed_name()` the backquoted form used by `name()`.
macro_rules! fixed_text {
    ($($kind:ident => $text:literal,)*) => {
        impl TokenKind {
            /// Fixed source text, or `None` for kinds whose text varies.
            pub fn lexeme(self) -> Option<&'static str> {
                match self {
                    $(Self::$kind => Some($text),)*
                    _ => None,
                }
            }

            fn fixed_name(self) -> Option<&'static str> {
                match self {
                    $(Self::$kind => Some(concat!("`", $text, "`")),)*
                    _ => None,
                }
            }
        }
    };
}

fixed_text! {
    LParen => "(",
    RParen => ")",
    LBracket => "[",
    RBracket => "]",
    LBrace => "{",
    RBrace => "}",
    Colon2 => "::",
    Comma => ",",
    Dot => ".",
    Dot2 => "..",
    Dot3 => "...",
    Question => "?",
    Colon => ":",
    Arrow => "=>",
    InsertBegin => "#{",
    InsertEnd => "}",

    Not => "!",
    NotEqual => "!=",
    NotMatch => "!~",
    AndOperator => "&&",
    OrOperator => "||",
    Xor => "^",
    Amp => "&",
    Or => "|",
    Compare => "<=>",
    Eq => "==",
    Eql => "===",
    Match => "=~",
    Gt => ">",
    GtEq => ">=",
    Lt => "<",
    LtEq => "<=",
    LShift => "<<",
    RShift => ">>",
    Plus => "+",
    Minus => "-",
    Mul => "*",
    Div => "/",
    Mod => "%",
    Pow => "**",
    Invert => "~",
    UnaryPlus => "+@",
    UnaryMinus => "-@",
    ElementRef => "[]",
    ElementSet => "[]=",

    Assign => "=",
    AssignAndOperator => "&&=",
    AssignOrOperator => "||=",
    AssignXor => "^=",
    AssignAnd => "&=",
    AssignOr => "|=",
    AssignLShift => "<<=",
    AssignRShift => ">>=",
    AssignPlus => "+=",
    AssignMinus => "-=",
    AssignMul => "*=",
    AssignDiv => "/=",
    AssignMod => "%=",
    AssignPow => "**=",

    KeywordLine => "__LINE__",
    KeywordEncoding => "__ENCODING__",
    KeywordFile => "__FILE__",
    KeywordBeginBlock => "BEGIN",
    KeywordEndBlock => "END",
    KeywordAlias => "alias",
    KeywordAnd => "and",
    KeywordBegin => "begin",
    KeywordBreak => "break",
    KeywordCase => "case",
    KeywordClass => "class",
    KeywordDef => "def",
    KeywordDefined => "defined?",
    KeywordDo => "do",
    KeywordElse => "else",
    KeywordElsif => "elsif",
    KeywordEnd => "end",
    KeywordEnsure => "ensure",
    KeywordFor => "for",
    KeywordFalse => "false",
    KeywordIf => "if",
    KeywordIn => "in",
    KeywordModule => "module",
    KeywordNext => "next",
    KeywordNil => "nil",
    KeywordNot => "not",
    KeywordOr => "or",
    KeywordRedo => "redo",
    KeywordRescue => "rescue",
    KeywordRetry => "retry",
    KeywordReturn => "return",
    KeywordSelf => "self",
    KeywordSuper => "super",
    KeywordThen => "then",
    KeywordTrue => "true",
    KeywordUndef => "undef",
    KeywordUnless => "unless",
    KeywordUntil => "until",
    KeywordWhen => "when",
    KeywordWhile => "while",
    KeywordYield => "yield",
}

impl TokenKind {
    /// Human-readable description, for diagnostics and debug output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Continue => "continuation",
            Self::Illegal => "illegal token",
            Self::EndOfInput => "end of input",
            Self::NewLine => "newline",
            Self::DecimalInteger => "decimal integer",
            Self::BinaryInteger => "binary integer",
            Self::OctalInteger => "octal integer",
            Self::HexadecimalInteger => "hexadecimal integer",
            Self::Float => "float literal",
            Self::String => "string literal",
            Self::StringPart => "string part",
            Self::HeredocBegin => "heredoc opener",
            Self::HeredocPart => "heredoc part",
            Self::HeredocEnd => "heredoc body",
            Self::InsertEnd => "interpolation end",
            Self::LocalVarIdent => "local variable",
            Self::LocalMethodIdent => "method name",
            Self::GlobalVarIdent => "global variable",
            Self::InstanceVarIdent => "instance variable",
            Self::ClassVarIdent => "class variable",
            Self::ConstIdent => "constant",
            _ => self.fixed_name().unwrap_or("token"),
        }
    }

    /// Returns `true` for reserved words.
    #[inline]
    pub fn is_keyword(self) -> bool {
        self as u8 >= Self::KeywordLine as u8
    }

    /// Returns `true` for `=` and the compound assignment operators.
    #[inline]
    pub fn is_assignment(self) -> bool {
        (Self::Assign as u8..=Self::AssignPow as u8).contains(&(self as u8))
    }

    /// Returns `true` if tokens of this kind carry a literal view.
    pub fn has_literal(self) -> bool {
        matches!(
            self,
            Self::Illegal
                | Self::DecimalInteger
                | Self::BinaryInteger
                | Self::OctalInteger
                | Self::HexadecimalInteger
                | Self::Float
                | Self::String
                | Self::StringPart
                | Self::HeredocBegin
                | Self::HeredocPart
                | Self::HeredocEnd
                | Self::LocalVarIdent
                | Self::LocalMethodIdent
                | Self::GlobalVarIdent
                | Self::InstanceVarIdent
                | Self::ClassVarIdent
                | Self::ConstIdent
        )
    }

    /// Returns `true` if a token of this kind can end an operand, so that a
    /// following `%` reads as a binary operator.
    pub fn ends_value(self) -> bool {
        matches!(
            self,
            Self::DecimalInteger
                | Self::BinaryInteger
                | Self::OctalInteger
                | Self::HexadecimalInteger
                | Self::Float
                | Self::String
                | Self::HeredocBegin
                | Self::HeredocEnd
                | Self::LocalVarIdent
                | Self::LocalMethodIdent
                | Self::GlobalVarIdent
                | Self::InstanceVarIdent
                | Self::ClassVarIdent
                | Self::ConstIdent
                | Self::RParen
                | Self::RBracket
                | Self::RBrace
                | Self::KeywordLine
                | Self::KeywordEncoding
                | Self::KeywordFile
                | Self::KeywordEnd
                | Self::KeywordFalse
                | Self::KeywordNil
                | Self::KeywordSelf
                | Self::KeywordTrue
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
