//! Runtime message templates
//!
//! Templates use positional `{}` placeholders. `{{` and `}}` produce literal
//! braces. Unlike `format!`, the template is only known at runtime, so
//! mismatches between placeholders and arguments are reported as errors.

use std::fmt::Display;

use thiserror::Error;

/// Errors produced while rendering a template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("not enough arguments: placeholder {index} has no value")]
    MissingArgument { index: usize },

    #[error("too many arguments: {given} given, {used} used")]
    UnusedArguments { given: usize, used: usize },

    #[error("unmatched '{brace}' at byte {position}")]
    UnmatchedBrace { brace: char, position: usize },

    #[error("unsupported placeholder '{{{contents}}}' at byte {position}")]
    UnsupportedPlaceholder { contents: String, position: usize },
}

/// Render `template`, substituting `args` in order
pub fn render(template: &str, args: &[&dyn Display]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut next = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, c)| c == '{').is_some() {
                    out.push('{');
                    continue;
                }

                let mut contents = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    contents.push(c);
                }
                if !closed {
                    return Err(TemplateError::UnmatchedBrace { brace: '{', position });
                }
                if !contents.is_empty() {
                    return Err(TemplateError::UnsupportedPlaceholder { contents, position });
                }

                let arg = args
                    .get(next)
                    .ok_or(TemplateError::MissingArgument { index: next })?;
                out.push_str(&arg.to_string());
                next += 1;
            }
            '}' => {
                if chars.next_if(|&(_, c)| c == '}').is_none() {
                    return Err(TemplateError::UnmatchedBrace { brace: '}', position });
                }
                out.push('}');
            }
            c => out.push(c),
        }
    }

    if next < args.len() {
        return Err(TemplateError::UnusedArguments {
            given: args.len(),
            used: next,
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(render("started", &[]).unwrap(), "started");
    }

    #[test]
    fn test_substitution() {
        let port = 8080;
        let host = "localhost";
        assert_eq!(
            render("listening on {}:{}", &[&host, &port]).unwrap(),
            "listening on localhost:8080"
        );
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(
            render("{{literal}} {}", &[&1]).unwrap(),
            "{literal} 1"
        );
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            render("{} and {}", &[&"one"]),
            Err(TemplateError::MissingArgument { index: 1 })
        );
    }

    #[test]
    fn test_unused_arguments() {
        assert_eq!(
            render("no placeholders", &[&1, &2]),
            Err(TemplateError::UnusedArguments { given: 2, used: 0 })
        );
    }

    #[test]
    fn test_unmatched_braces() {
        assert_eq!(
            render("oops {", &[]),
            Err(TemplateError::UnmatchedBrace { brace: '{', position: 5 })
        );
        assert_eq!(
            render("oops }", &[]),
            Err(TemplateError::UnmatchedBrace { brace: '}', position: 5 })
        );
    }

    #[test]
    fn test_named_placeholder_rejected() {
        assert!(matches!(
            render("{name}", &[&"x"]),
            Err(TemplateError::UnsupportedPlaceholder { .. })
        ));
    }
}
