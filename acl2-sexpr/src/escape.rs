use logos::Logos;

/// Lexer token for the body of a quoted string.
#[derive(Debug, Clone, Logos)]
enum EscapedToken {
    #[token(r#"\n"#, |_| '\n')]
    #[token(r#"\r"#, |_| '\r')]
    #[token(r#"\t"#, |_| '\t')]
    #[token(r#"\""#, |_| '"')]
    #[token(r#"\\"#, |_| '\\')]
    Escaped(char),

    #[regex(r#"\\u[a-fA-F0-9]{4}"#, |lex| parse_code(lex.slice()))]
    Code(char),

    #[regex(r#"[^\\]"#)]
    Literal,
}

/// Parses an escape of the form `\uXXXX` naming a character code up to 255.
fn parse_code(str: &str) -> Option<char> {
    // Skip the '\u' prefix
    let hex = str.get(2..)?;
    let code = u32::from_str_radix(hex, 16).ok().filter(|code| *code <= 0xFF)?;
    char::from_u32(code)
}

/// Replaces escape sequences with their corresponding characters.
pub fn unescape(str: &str) -> Option<String> {
    let mut lexer = EscapedToken::lexer(str);
    let mut output = String::with_capacity(str.len());

    while let Some(token) = lexer.next() {
        let token = token.ok()?;

        match token {
            EscapedToken::Escaped(c) => output.push(c),
            EscapedToken::Code(c) => output.push(c),
            EscapedToken::Literal => output.push_str(lexer.slice()),
        }
    }

    Some(output)
}

/// Quotes a string. Only `"` and `\` are escaped; the reader on the other
/// end treats a backslash as escaping exactly the next character.
pub fn escape_string(str: &str) -> String {
    let mut output = String::with_capacity(str.len() + 2);
    output.push('"');

    for c in str.chars() {
        match c {
            '"' => output.push_str(r#"\""#),
            '\\' => output.push_str(r#"\\"#),
            c => output.push(c),
        }
    }

    output.push('"');
    output
}

#[cfg(test)]
mod test {
    use super::{escape_string, unescape};
    use rstest::rstest;

    #[rstest]
    #[case("string", r#""string""#)]
    #[case("", r#""""#)]
    #[case(r#"say "hi""#, r#""say \"hi\"""#)]
    #[case(r"C:\dir", r#""C:\\dir""#)]
    #[case("two\nlines", "\"two\nlines\"")]
    fn test_escape_string(#[case] string: &str, #[case] expected: &str) {
        assert_eq!(expected, escape_string(string));
    }

    #[rstest]
    #[case(r#"\""#, r#"""#)]
    #[case(r"\\", r"\")]
    #[case(r"a\nb", "a\nb")]
    #[case(r"\r\t", "\r\t")]
    #[case(r"\u0041", "A")]
    #[case(r"\u00ff", "\u{ff}")]
    #[case("raw\nnewline", "raw\nnewline")]
    fn test_unescape(#[case] escaped: &str, #[case] expected: &str) {
        assert_eq!(expected, unescape(escaped).unwrap());
    }

    #[rstest]
    #[case(r"\q")]
    #[case(r"\u0100")]
    #[case(r"\u00")]
    #[case(r"trailing\")]
    fn test_unescape_invalid(#[case] escaped: &str) {
        assert_eq!(None, unescape(escaped));
    }
}
