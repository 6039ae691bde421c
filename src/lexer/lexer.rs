use std::rc::Rc;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

// Classification of a numeric literal as it is consumed. A second decimal
// point does not stop the scan; the whole run is absorbed and reported as
// one illegal token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NumberState {
    Integer,
    Float,
    Malformed,
}

impl NumberState {
    pub fn on_decimal_point(self) -> NumberState {
        match self {
            NumberState::Integer => NumberState::Float,
            NumberState::Float | NumberState::Malformed => NumberState::Malformed,
        }
    }

    pub fn token_kind(self) -> TokenKind {
        match self {
            NumberState::Integer => TokenKind::Integer,
            NumberState::Float => TokenKind::Float,
            NumberState::Malformed => TokenKind::Illegal,
        }
    }
}

#[derive(Clone)]
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: u8,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<input>"))
        };

        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
        };

        // Prime the cursor so `ch` holds the first character.
        lexer.advance();
        lexer
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            b'=' => {
                if self.peek() == b'=' {
                    let start = self.position;
                    self.advance();
                    self.make_token(TokenKind::Equals, "==", start)
                } else {
                    self.make_token(TokenKind::Assignment, "=", self.position)
                }
            }
            b'!' => {
                if self.peek() == b'=' {
                    let start = self.position;
                    self.advance();
                    self.make_token(TokenKind::NotEquals, "!=", start)
                } else {
                    self.make_token(TokenKind::Not, "!", self.position)
                }
            }
            b';' => self.make_token(TokenKind::Semicolon, ";", self.position),
            b'(' => self.make_token(TokenKind::OpenParen, "(", self.position),
            b')' => self.make_token(TokenKind::CloseParen, ")", self.position),
            b',' => self.make_token(TokenKind::Comma, ",", self.position),
            b'+' => self.make_token(TokenKind::Plus, "+", self.position),
            b'{' => self.make_token(TokenKind::OpenCurly, "{", self.position),
            b'}' => self.make_token(TokenKind::CloseCurly, "}", self.position),
            b'-' => self.make_token(TokenKind::Dash, "-", self.position),
            b'*' => self.make_token(TokenKind::Star, "*", self.position),
            b'/' => self.make_token(TokenKind::Slash, "/", self.position),
            b'<' => self.make_token(TokenKind::Less, "<", self.position),
            b'>' => self.make_token(TokenKind::Greater, ">", self.position),
            // End of input. The cursor is not advanced, so every later call
            // lands here again and keeps returning EOF.
            0 => return self.make_token(TokenKind::EOF, "", self.position),
            ch if is_letter(ch) => {
                let start = self.position;
                let value = self.read_identifier();
                let kind = match RESERVED_LOOKUP.get(value.as_str()) {
                    Some(kind) => *kind,
                    None => TokenKind::Identifier,
                };

                // read_identifier already advanced past the lexeme.
                return MK_TOKEN!(kind, value, self.span(start, self.position));
            }
            ch if is_digit(ch) => {
                let start = self.position;
                let (value, kind) = self.read_number();

                return MK_TOKEN!(kind, value, self.span(start, self.position));
            }
            ch => self.make_token(TokenKind::Illegal, &(ch as char).to_string(), self.position),
        };

        self.advance();
        token
    }

    fn advance(&mut self) {
        if self.read_position >= self.source.len() {
            self.ch = 0;
        } else {
            self.ch = self.source.as_bytes()[self.read_position];
        }

        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek(&self) -> u8 {
        if self.read_position >= self.source.len() {
            0
        } else {
            self.source.as_bytes()[self.read_position]
        }
    }

    fn skip_whitespace(&mut self) {
        while self.ch == b' ' || self.ch == b'\t' || self.ch == b'\n' || self.ch == b'\r' {
            self.advance();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;

        while is_letter(self.ch) {
            self.advance();
        }

        String::from(&self.source[start..self.position])
    }

    fn read_number(&mut self) -> (String, TokenKind) {
        let start = self.position;
        let mut state = NumberState::Integer;

        while is_digit(self.ch) || self.ch == b'.' {
            if self.ch == b'.' {
                state = state.on_decimal_point();
            }

            self.advance();
        }

        (
            String::from(&self.source[start..self.position]),
            state.token_kind(),
        )
    }

    fn make_token(&self, kind: TokenKind, value: &str, start: usize) -> Token {
        MK_TOKEN!(
            kind,
            String::from(value),
            self.span(start, start + value.len())
        )
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(start as u32, Rc::clone(&self.file)),
            end: Position(end as u32, Rc::clone(&self.file)),
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let at_eof = token.kind == TokenKind::EOF;
        tokens.push(token);

        if at_eof {
            break;
        }
    }

    tokens
}
