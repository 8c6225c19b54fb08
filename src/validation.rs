//! Identifier checks applied before rendering

use crate::error::StatementError;

/// PostgreSQL truncates identifiers longer than NAMEDATALEN - 1 bytes
pub const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Checks for names that end up double-quoted in the rendered SQL.
///
/// Quoting makes any character safe except NUL, which PostgreSQL rejects in
/// identifiers outright.
pub fn validate_quoted_name(context: &'static str, name: &str) -> Result<(), StatementError> {
    if name.is_empty() {
        return Err(StatementError::invalid_identifier(
            context,
            name,
            "must not be empty",
        ));
    }

    if name.contains('\0') {
        return Err(StatementError::invalid_identifier(
            context,
            name,
            "must not contain NUL characters",
        ));
    }

    Ok(())
}

/// Checks for role and owner tokens, which are emitted without quoting.
///
/// With `strict` set, the token must be a plain SQL identifier: letters,
/// numbers, underscores and dollar signs, starting with a letter or
/// underscore, no longer than [`MAX_IDENTIFIER_LENGTH`] bytes.
pub fn validate_bare_name(
    context: &'static str,
    name: &str,
    strict: bool,
) -> Result<(), StatementError> {
    validate_quoted_name(context, name)?;

    if !strict {
        return Ok(());
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(StatementError::invalid_identifier(
            context,
            name,
            "must be at most 63 bytes long",
        ));
    }

    if !is_valid_sql_identifier(name) {
        return Err(StatementError::invalid_identifier(
            context,
            name,
            "must contain only letters, numbers, underscores, and dollar signs, starting with letter or underscore",
        ));
    }

    Ok(())
}

/// Checks the `(...)` argument list of a function target, which is emitted
/// verbatim after the quoted function name.
///
/// The list must be one balanced parenthesized group running to the end of
/// the target. Statement separators, string literals and comments are
/// rejected outside double-quoted type names.
pub fn validate_argument_list(target: &str, arguments: &str) -> Result<(), StatementError> {
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut chars = arguments.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        if in_quotes {
            if c == '"' {
                in_quotes = false;
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| unbalanced(target))?;
                if depth == 0 && index + 1 != arguments.len() {
                    return Err(StatementError::invalid_identifier(
                        "target",
                        target,
                        "must end with its argument list",
                    ));
                }
            }
            ';' | '\'' | '\0' => {
                return Err(StatementError::invalid_identifier(
                    "target",
                    target,
                    "argument list must not contain ';', quotes, or NUL characters",
                ));
            }
            '-' | '/'
                if matches!(
                    (c, chars.peek()),
                    ('-', Some((_, '-'))) | ('/', Some((_, '*')))
                ) =>
            {
                return Err(StatementError::invalid_identifier(
                    "target",
                    target,
                    "argument list must not contain comments",
                ));
            }
            _ => {}
        }
    }

    if depth != 0 || in_quotes {
        return Err(unbalanced(target));
    }

    Ok(())
}

fn unbalanced(target: &str) -> StatementError {
    StatementError::invalid_identifier("target", target, "has unbalanced parentheses")
}

fn is_valid_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
