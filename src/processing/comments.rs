// src/processing/comments.rs

use super::languages::{syntax_for_extension, CommentSyntax};
use log::{debug, trace};

/// Removes comments from `content` based on the language implied by `extension`.
///
/// Line and block comments are stripped with a small state machine that skips
/// over string and character literals, so markers inside literals survive. It
/// is a syntactic, best-effort pass and not a parser: raw strings, nested
/// block comments and similar constructs may be misjudged. Shebang lines and
/// license headers get no special treatment.
///
/// After stripping, trailing whitespace is removed from every line and blank
/// lines at the start and end of the text are dropped. The pass is repeated
/// until the text stops changing, so `scrub(scrub(x), e) == scrub(x, e)`.
///
/// Content with an unrecognized extension is returned unchanged.
///
/// # Examples
/// ```
/// use git2gpt::processing::scrub;
///
/// let code = r#"
///     let x = 1; // A comment
///     /* Another comment */
///     let y = "// not a comment";
/// "#;
///
/// let expected = "    let x = 1;\n\n    let y = \"// not a comment\";";
///
/// assert_eq!(scrub(code, "rs"), expected);
/// assert_eq!(scrub(code, "txt"), code);
/// ```
pub fn scrub(content: &str, extension: &str) -> String {
    let Some(syntax) = syntax_for_extension(extension) else {
        trace!("No comment syntax for extension '{}'", extension);
        return content.to_string();
    };

    let mut current = content.to_string();
    let mut passes = 0;
    loop {
        let next = scrub_once(&current, syntax);
        passes += 1;
        if next == current {
            break;
        }
        current = next;
    }

    debug!(
        "Comment removal applied in {} pass(es). Original len: {}, New len: {}",
        passes,
        content.len(),
        current.len()
    );
    current
}

enum State {
    Code,
    LineComment,
    BlockComment { close: &'static str },
    Literal { quote: char },
}

/// One stripping pass. Its output never gets longer than its input.
fn scrub_once(content: &str, syntax: &CommentSyntax) -> String {
    let mut result = String::with_capacity(content.len());
    let mut state = State::Code;
    let mut rest = content;

    while let Some(c) = rest.chars().next() {
        match state {
            State::Code => {
                if let Some((open, close)) = syntax.block_opening(rest) {
                    state = State::BlockComment { close };
                    rest = &rest[open.len()..];
                    continue;
                }
                if let Some(marker) = syntax.line_opening(rest) {
                    state = State::LineComment;
                    rest = &rest[marker.len()..];
                    continue;
                }
                if syntax.quotes.contains(&c) {
                    state = State::Literal { quote: c };
                } else if c == '\'' && syntax.char_literals {
                    if let Some(len) = char_literal_len(rest) {
                        result.push_str(&rest[..len]);
                        rest = &rest[len..];
                        continue;
                    }
                }
                result.push(c);
            }
            State::LineComment => {
                if c == '\n' {
                    result.push(c); // Keep the newline
                    state = State::Code;
                }
            }
            State::BlockComment { close } => {
                if rest.starts_with(close) {
                    rest = &rest[close.len()..];
                    // Keep tokens on either side of an inline comment apart.
                    if result.chars().last().is_some_and(|last| !last.is_whitespace()) {
                        result.push(' ');
                    }
                    state = State::Code;
                    continue;
                }
            }
            State::Literal { quote } => {
                result.push(c);
                if c == '\\' {
                    if let Some(escaped) = rest[1..].chars().next() {
                        result.push(escaped);
                        rest = &rest[1 + escaped.len_utf8()..];
                        continue;
                    }
                } else if c == quote {
                    state = State::Code;
                }
            }
        }
        rest = &rest[c.len_utf8()..];
    }

    result
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<&str>>()
        .join("\n")
        .trim_matches(|c: char| c == '\r' || c == '\n')
        .to_string()
}

/// Length in bytes of a character literal starting at `text`, if it is one.
///
/// Accepts `'x'` and escaped forms such as `'\n'` or `'\u{1F600}'`. Anything
/// else (a Rust lifetime, a Haskell prime) is not a literal.
fn char_literal_len(text: &str) -> Option<usize> {
    let mut chars = text.char_indices().skip(1);
    let (_, first) = chars.next()?;
    if first == '\\' {
        chars.next()?;
        chars
            .take(10)
            .find(|&(_, c)| c == '\'')
            .map(|(idx, _)| idx + 1)
    } else {
        match chars.next() {
            Some((idx, '\'')) if first != '\n' => Some(idx + 1),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_comments() {
        let input = "fn main() {\n    println!(\"Hello\");\n}";
        assert_eq!(scrub(input, "rs"), input);
    }

    #[test]
    fn test_line_comments() {
        let input = "// Full line comment\nlet x = 1; // Trailing comment\n// Another";
        assert_eq!(scrub(input, "rs"), "let x = 1;");
    }

    #[test]
    fn test_block_comments() {
        let input = "/* Block */\nlet y = 2; /* Inline */ let z = 3;\n/* Multi-\nline\n*/";
        assert_eq!(scrub(input, "c"), "let y = 2;  let z = 3;");
    }

    #[test]
    fn test_inline_block_keeps_tokens_apart() {
        assert_eq!(scrub("int/**/x;", "c"), "int x;");
    }

    #[test]
    fn test_comments_in_strings() {
        let input = r#"let s = "// not a comment"; let t = "/* nor this */";"#;
        assert_eq!(scrub(input, "rs"), input);
    }

    #[test]
    fn test_escaped_quote_in_string() {
        let input = r#"let s = "a \" // still string"; // gone"#;
        assert_eq!(scrub(input, "java"), r#"let s = "a \" // still string";"#);
    }

    #[test]
    fn test_char_literals_and_lifetimes() {
        let input = "let c = '\"'; // quote char\nfn f<'a>(x: &'a str) -> &'a str { x } // done";
        assert_eq!(
            scrub(input, "rs"),
            "let c = '\"';\nfn f<'a>(x: &'a str) -> &'a str { x }"
        );

        let escaped = "let slash = '\\\\'; // backslash";
        assert_eq!(scrub(escaped, "rs"), "let slash = '\\\\';");

        let quote = "let q = '\\''; // single quote";
        assert_eq!(scrub(quote, "rs"), "let q = '\\'';");
    }

    #[test]
    fn test_hash_languages() {
        let input = "#!/usr/bin/env python\nx = \"# kept\"  # dropped\n\n# trailing";
        assert_eq!(scrub(input, "py"), "x = \"# kept\"");
        assert_eq!(scrub("key: 'a#b' # note", "yaml"), "key: 'a#b'");
    }

    #[test]
    fn test_sql_and_lua() {
        assert_eq!(
            scrub("SELECT '--x' -- comment\nFROM t; /* c */", "sql"),
            "SELECT '--x'\nFROM t;"
        );
        assert_eq!(
            scrub("local a = 1 --[[ block\n comment ]] -- line\nreturn a", "lua"),
            "local a = 1\nreturn a"
        );
    }

    #[test]
    fn test_markup() {
        let input = "<p>Hi</p>\n<!-- note -->\n<p>it's fine</p>";
        assert_eq!(scrub(input, "html"), "<p>Hi</p>\n\n<p>it's fine</p>");
    }

    #[test]
    fn test_go_raw_strings_and_runes() {
        let input = "s := `// raw`\nr := '/' // slash rune";
        assert_eq!(scrub(input, "go"), "s := `// raw`\nr := '/'");
    }

    #[test]
    fn test_js_template_and_single_quotes() {
        let input = "const a = 'it // is'; const b = `/* x */`; // end";
        assert_eq!(scrub(input, "ts"), "const a = 'it // is'; const b = `/* x */`;");
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert_eq!(scrub("code(); /* never closed\nmore", "c"), "code();");
    }

    #[test]
    fn test_division_is_not_a_comment() {
        let input = "let r = a / b / c;";
        assert_eq!(scrub(input, "rs"), input);
    }

    #[test]
    fn test_unknown_extension_unchanged() {
        let input = "  // looks like a comment  \n\n";
        assert_eq!(scrub(input, "txt"), input);
        assert_eq!(scrub(input, ""), input);
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = "a(); // c\r\nb();\r\n";
        assert_eq!(scrub(input, "c"), "a();\nb();");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            ("x = 1 /* a */ /* b */ // c\n\n\n  y = 2  \n", "c"),
            ("/* a */ / /* b */ / c", "c"),
            ("'unterminated # here\n# comment", "py"),
            ("<!-- a --><!-- b -->text<!--", "md"),
            ("s = \"\\\\\" // x", "js"),
        ];
        for (input, ext) in samples {
            let once = scrub(input, ext);
            assert_eq!(scrub(&once, ext), once, "not idempotent for {:?}", input);
        }
    }
}
