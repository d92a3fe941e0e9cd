use crate::ast::Placeholder;

/// A parser for `{...}` placeholder tokens in a phrase key.
///
/// Matches are non-greedy and non-overlapping: a token opens at a `{`,
/// closes at the next `}`, and scanning resumes after the closing brace.
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser { input, position: 0 }
    }

    pub fn parse(&mut self) -> Vec<Placeholder> {
        let mut placeholders = Vec::new();
        while let Some(placeholder) = self.parse_placeholder() {
            placeholders.push(placeholder);
        }
        placeholders
    }

    fn parse_placeholder(&mut self) -> Option<Placeholder> {
        let rest = &self.input[self.position..];
        let open = rest.find('{')?;
        let body_start = open + 1;
        let close = rest[body_start..].find('}')?;
        let token = &rest[open..body_start + close + 1];
        let body = &rest[body_start..body_start + close];
        self.position += body_start + close + 1;
        Some(Placeholder::new(token, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let mut parser = Parser::new("Today is {0} the {1}");
        let placeholders = parser.parse();
        assert_eq!(
            placeholders,
            vec![
                Placeholder::Simple {
                    token: "{0}".to_string(),
                    key: "0".to_string(),
                },
                Placeholder::Simple {
                    token: "{1}".to_string(),
                    key: "1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_plural() {
        let mut parser = Parser::new("apple{0|s}");
        let placeholders = parser.parse();
        assert_eq!(
            placeholders,
            vec![Placeholder::Plural {
                token: "{0|s}".to_string(),
                key: "0".to_string(),
                suffix: "s".to_string(),
            }]
        );
    }

    #[test]
    fn test_parse_mixed() {
        let mut parser = Parser::new("I have {0} apple{0|s} and {1} banana{1|s}");
        let placeholders = parser.parse();
        assert_eq!(placeholders.len(), 4);
        assert_eq!(placeholders[0].token(), "{0}");
        assert_eq!(placeholders[1].token(), "{0|s}");
        assert_eq!(placeholders[2].token(), "{1}");
        assert_eq!(placeholders[3].token(), "{1|s}");
    }

    #[test]
    fn test_parse_plain_text() {
        let mut parser = Parser::new("Hello Liam");
        assert_eq!(parser.parse(), vec![]);
    }

    #[test]
    fn test_parse_named_key() {
        let mut parser = Parser::new("{count} item{count|s}");
        let placeholders = parser.parse();
        assert_eq!(
            placeholders[0],
            Placeholder::Simple {
                token: "{count}".to_string(),
                key: "count".to_string(),
            }
        );
    }

    #[test]
    fn test_non_greedy() {
        // a token closes at the first '}' after its opening brace
        let mut parser = Parser::new("{a{b}");
        let placeholders = parser.parse();
        assert_eq!(
            placeholders,
            vec![Placeholder::Simple {
                token: "{a{b}".to_string(),
                key: "a{b".to_string(),
            }]
        );
    }

    #[test]
    fn test_unclosed_brace() {
        let mut parser = Parser::new("Hello {0");
        assert_eq!(parser.parse(), vec![]);
    }

    #[test]
    fn test_empty_body() {
        let mut parser = Parser::new("{}");
        assert_eq!(
            parser.parse(),
            vec![Placeholder::Simple {
                token: "{}".to_string(),
                key: String::new(),
            }]
        );
    }
}
