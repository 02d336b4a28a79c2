use logos::Logos;

/// Represents one token of a tokenized program.
///
/// Program strings are a sequence of operation invocations separated by the
/// literal `", "` (comma-space), each shaped `opname(arg1, arg2)`. Token
/// kinds are distinguished purely by shape: whether a name actually belongs
/// to the operation set is the evaluator's concern, not the lexer's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A name glued to its opening parenthesis, e.g. `add(`.
    ///
    /// Carries the name without the parenthesis. Produced whenever a chunk
    /// of non-parenthesis characters is immediately followed by `(` within
    /// one comma-group.
    Call(String),
    /// A bare `(` with no preceding chunk in its comma-group.
    LParen,
    /// A closing `)`.
    RParen,
    /// An argument atom: a numeral, a named constant, a step reference
    /// `#<n>`, or unrecognized text the evaluator will reject.
    Atom(String),
    /// The end-of-program marker, appended exactly once by [`tokenize`].
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call(name) => write!(f, "{name}("),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Atom(text) => write!(f, "{text}"),
            Self::Eof => write!(f, "EOF"),
        }
    }
}

/// Raw lexeme of one comma-group.
///
/// The `", "` separator is two bytes, so it cannot be expressed as a logos
/// rule without colliding with maximal-munch chunks; the input is split on
/// the separator first and each group is lexed on its own.
#[derive(Logos, Debug, PartialEq)]
enum Piece {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any run of characters between parentheses. Whitespace is preserved:
    /// arguments are delimited only by parentheses and the group separator.
    #[regex(r"[^()]+", |lex| lex.slice().to_string())]
    Chunk(String),
}

/// Tokenizes a flat program string into a token sequence.
///
/// This function is pure and total: malformed input never fails here, it
/// simply yields a sequence the evaluator will reject. The input is split on
/// the literal `", "` separator (so arguments must never contain a literal
/// comma-space; thousands separators are illegal inside program strings),
/// each group is scanned for parentheses, a chunk directly followed by `(`
/// fuses into a [`Token::Call`], and a single [`Token::Eof`] marker is
/// appended at the end. A program with no parentheses at all yields
/// `[Atom, Eof]`, the bare-literal answer form.
///
/// # Parameters
/// - `source`: The raw program string, as produced by the model.
///
/// # Returns
/// The token sequence, always terminated by [`Token::Eof`].
///
/// # Example
/// ```
/// use finprog::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("subtract(100, 50), divide(#0, 50)");
/// assert_eq!(tokens,
///            vec![Token::Call("subtract".to_string()),
///                 Token::Atom("100".to_string()),
///                 Token::Atom("50".to_string()),
///                 Token::RParen,
///                 Token::Call("divide".to_string()),
///                 Token::Atom("#0".to_string()),
///                 Token::Atom("50".to_string()),
///                 Token::RParen,
///                 Token::Eof]);
///
/// assert_eq!(tokenize("306870"),
///            vec![Token::Atom("306870".to_string()), Token::Eof]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for group in source.split(", ") {
        let mut pending: Option<String> = None;
        let mut lexer = Piece::lexer(group);

        while let Some(piece) = lexer.next() {
            match piece {
                Ok(Piece::Chunk(text)) => append_pending(&mut pending, &text),
                Ok(Piece::LParen) => match pending.take() {
                    Some(name) => tokens.push(Token::Call(name)),
                    None => tokens.push(Token::LParen),
                },
                Ok(Piece::RParen) => {
                    if let Some(text) = pending.take() {
                        tokens.push(Token::Atom(text));
                    }
                    tokens.push(Token::RParen);
                },
                // The three rules cover every character; keep the lexer
                // total anyway.
                Err(()) => append_pending(&mut pending, lexer.slice()),
            }
        }

        if let Some(text) = pending.take() {
            tokens.push(Token::Atom(text));
        }
    }

    tokens.push(Token::Eof);
    tokens
}

fn append_pending(pending: &mut Option<String>, text: &str) {
    match pending {
        Some(buffer) => buffer.push_str(text),
        None => *pending = Some(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(text: &str) -> Token {
        Token::Atom(text.to_string())
    }

    #[test]
    fn bare_literal_yields_atom_and_eof() {
        assert_eq!(tokenize("306870"), vec![atom("306870"), Token::Eof]);
    }

    #[test]
    fn unknown_names_still_tokenize() {
        assert_eq!(tokenize("frobnicate(1, 2)"),
                   vec![Token::Call("frobnicate".to_string()),
                        atom("1"),
                        atom("2"),
                        Token::RParen,
                        Token::Eof]);
    }

    #[test]
    fn lone_parenthesis_is_its_own_token() {
        assert_eq!(tokenize("(x)"),
                   vec![Token::LParen, atom("x"), Token::RParen, Token::Eof]);
    }

    #[test]
    fn whitespace_inside_a_group_is_preserved() {
        // Double spaces survive: only the exact ", " separator splits.
        assert_eq!(tokenize("add(1,  2)"),
                   vec![Token::Call("add".to_string()),
                        atom("1"),
                        atom(" 2"),
                        Token::RParen,
                        Token::Eof]);
    }

    #[test]
    fn empty_input_yields_only_the_marker() {
        assert_eq!(tokenize(""), vec![Token::Eof]);
    }
}
