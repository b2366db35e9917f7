use serde::{Serialize, Deserialize};

/// Token representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,      // The token text, possibly "word/TAG" after tagging
    pub position: u32,     // Position in document
    pub offset: usize,     // Byte offset in original text
    pub length: usize,     // Token length in bytes
    pub token_type: TokenType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    Word,
    Number,
}

impl Token {
    pub fn new(text: String, position: u32, offset: usize) -> Self {
        let length = text.len();
        let token_type = if !text.is_empty() && text.chars().all(|c| c.is_numeric()) {
            TokenType::Number
        } else {
            TokenType::Word
        };
        Token {
            text,
            position,
            offset,
            length,
            token_type,
        }
    }
}
