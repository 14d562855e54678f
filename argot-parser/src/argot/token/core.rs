//! Core token types shared by the classifier, the cursor and the grammar.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric category of a token.
pub type TokenCode = i64;

/// Text of the synthetic token closing every classified stream.
pub const END_MARKER: &str = "(end-f)";

/// The built-in token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefaultToken {
    Function = 1,
    Option = 2,
    Argument = 3,
    EndCode = 4,
}

impl DefaultToken {
    pub const fn code(self) -> TokenCode {
        self as TokenCode
    }

    pub fn from_code(code: TokenCode) -> Option<Self> {
        match code {
            1 => Some(DefaultToken::Function),
            2 => Some(DefaultToken::Option),
            3 => Some(DefaultToken::Argument),
            4 => Some(DefaultToken::EndCode),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DefaultToken::Function => "Function",
            DefaultToken::Option => "Option",
            DefaultToken::Argument => "Argument",
            DefaultToken::EndCode => "EndCode",
        }
    }
}

impl fmt::Display for DefaultToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The category codes in effect for one token table and the grammar built against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCodes {
    pub function: TokenCode,
    pub option: TokenCode,
    pub argument: TokenCode,
    pub end: TokenCode,
}

impl TokenCodes {
    /// Name of the category `code` belongs to under these codes, if it is one of the four.
    pub fn name_of(&self, code: TokenCode) -> Option<&'static str> {
        if code == self.function {
            Some(DefaultToken::Function.name())
        } else if code == self.option {
            Some(DefaultToken::Option.name())
        } else if code == self.argument {
            Some(DefaultToken::Argument.name())
        } else if code == self.end {
            Some(DefaultToken::EndCode.name())
        } else {
            None
        }
    }

    /// Human label for `code`: the category name, or the raw number for caller-defined codes.
    pub fn label(&self, code: TokenCode) -> String {
        match self.name_of(code) {
            Some(name) => name.to_string(),
            None => code.to_string(),
        }
    }
}

impl Default for TokenCodes {
    fn default() -> Self {
        Self {
            function: DefaultToken::Function.code(),
            option: DefaultToken::Option.code(),
            argument: DefaultToken::Argument.code(),
            end: DefaultToken::EndCode.code(),
        }
    }
}

/// One classified argument string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub code: TokenCode,
}

impl Token {
    pub fn new(text: impl Into<String>, code: TokenCode) -> Self {
        Self {
            text: text.into(),
            code,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn code(&self) -> TokenCode {
        self.code
    }

    /// Whether this token carries the code of a built-in category.
    pub fn is(&self, category: DefaultToken) -> bool {
        self.code == category.code()
    }
}

impl From<(String, TokenCode)> for Token {
    fn from((text, code): (String, TokenCode)) -> Self {
        Self { text, code }
    }
}

impl From<(&str, TokenCode)> for Token {
    fn from((text, code): (&str, TokenCode)) -> Self {
        Self::new(text, code)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DefaultToken::from_code(self.code) {
            Some(category) => write!(f, "[{}, {}]", self.text, category),
            None => write!(f, "[{}, {}]", self.text, self.code),
        }
    }
}
