pub mod grant;
pub mod schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Safety {
    Safe,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSql {
    pub safety: Safety,
    pub sql: String,
}

impl RenderedSql {
    pub fn new(sql: String) -> Self {
        Self {
            sql,
            safety: Safety::Safe,
        }
    }

    pub fn destructive(sql: String) -> Self {
        Self {
            sql,
            safety: Safety::Destructive,
        }
    }
}

pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Dialect-specific identifier quoting.
///
/// Hosts that already own a quoting routine (for example a connection layer
/// that knows the server's settings) can plug it in here.
pub trait IdentifierQuoter {
    fn quote_ident(&self, ident: &str) -> String;

    /// Quote a possibly schema-qualified name part by part: `public.users`
    /// becomes `"public"."users"`. A double-quoted part may contain dots.
    fn quote_qualified(&self, name: &str) -> String {
        match split_qualified_name(name) {
            Some(parts) => parts
                .iter()
                .map(|part| self.quote_ident(part))
                .collect::<Vec<_>>()
                .join("."),
            None => self.quote_ident(name),
        }
    }
}

/// Split `schema.object` on dots outside double quotes, unescaping quoted
/// parts (`"a.b"` is one part `a.b`, `""` inside quotes is `"`).
///
/// Returns `None` when a quoted part is never closed.
pub fn split_qualified_name(name: &str) -> Option<Vec<String>> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            '.' if !in_quotes => parts.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    if in_quotes {
        return None;
    }
    parts.push(current);
    Some(parts)
}

/// Split a function target at its first `(` outside double quotes:
/// `public.calc(integer)` gives `("public.calc", Some("(integer)"))`.
pub fn split_function_signature(target: &str) -> (&str, Option<&str>) {
    let mut in_quotes = false;
    for (index, c) in target.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '(' if !in_quotes => return (&target[..index], Some(&target[index..])),
            _ => {}
        }
    }
    (target, None)
}

/// Standard PostgreSQL double-quote identifier quoting
#[derive(Debug, Clone, Copy, Default)]
pub struct PgQuoter;

impl IdentifierQuoter for PgQuoter {
    fn quote_ident(&self, ident: &str) -> String {
        quote_ident(ident)
    }
}
