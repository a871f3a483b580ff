//! Raw, unresolved type references.
//!
//! A [`TypeReference`] names a type the way source code would spell it:
//! `Map<String, List<Widget>>[]`. Names are not checked against any catalog
//! until an introspector resolves the reference.

use crate::error::ModelError;
use crate::resolved::ResolvedType;
use std::fmt;
use std::str::FromStr;
use tyname_common::limits::MAX_TYPE_REFERENCE_NESTING;

/// Unresolved type reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeReference {
    Named {
        name: String,
        args: Vec<TypeReference>,
    },
    Array(Box<TypeReference>),
}

impl TypeReference {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeReference>) -> Self {
        Self::Named {
            name: name.into(),
            args,
        }
    }

    pub fn array_of(element: TypeReference) -> Self {
        Self::Array(Box::new(element))
    }

    /// Nesting depth: one per named type and one per array dimension along
    /// the deepest path. `Widget` is 1, `List<Widget[]>` is 3.
    pub fn depth(&self) -> u32 {
        match self {
            Self::Named { args, .. } => 1 + args.iter().map(Self::depth).max().unwrap_or(0),
            Self::Array(element) => 1 + element.depth(),
        }
    }

    /// Parse a textual reference such as `java.util.List<Widget>[]`.
    pub fn parse(input: &str) -> Result<Self, ModelError> {
        let mut parser = ReferenceParser { input, pos: 0 };
        let reference = parser.reference(0)?;
        parser.skip_whitespace();
        if parser.pos < input.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        // Suffixes on an outer type deepen everything parsed before them.
        if reference.depth() > MAX_TYPE_REFERENCE_NESTING {
            return Err(ModelError::NestingTooDeep {
                limit: MAX_TYPE_REFERENCE_NESTING,
            });
        }
        Ok(reference)
    }
}

impl FromStr for TypeReference {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, args } => {
                f.write_str(name)?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        write!(f, "{arg}")?;
                    }
                    f.write_str(">")?;
                }
                Ok(())
            }
            Self::Array(element) => write!(f, "{element}[]"),
        }
    }
}

struct ReferenceParser<'a> {
    input: &'a str,
    pos: usize,
}

impl ReferenceParser<'_> {
    /// `ancestors` counts the enclosing levels known so far; array suffixes
    /// of enclosing types are only known once they have been parsed.
    fn reference(&mut self, ancestors: u32) -> Result<TypeReference, ModelError> {
        if ancestors >= MAX_TYPE_REFERENCE_NESTING {
            return Err(ModelError::NestingTooDeep {
                limit: MAX_TYPE_REFERENCE_NESTING,
            });
        }

        let name = self.identifier()?;
        let mut args = Vec::new();
        if self.eat('<') {
            loop {
                args.push(self.reference(ancestors + 1)?);
                if self.eat(',') {
                    continue;
                }
                if self.eat('>') {
                    break;
                }
                return Err(self.error("expected ',' or '>'"));
            }
        }

        let mut reference = TypeReference::Named { name, args };
        let mut levels = ancestors;
        while self.eat('[') {
            if !self.eat(']') {
                return Err(self.error("expected ']'"));
            }
            levels += 1;
            if levels >= MAX_TYPE_REFERENCE_NESTING {
                return Err(ModelError::NestingTooDeep {
                    limit: MAX_TYPE_REFERENCE_NESTING,
                });
            }
            reference = TypeReference::array_of(reference);
        }
        Ok(reference)
    }

    fn identifier(&mut self) -> Result<String, ModelError> {
        self.skip_whitespace();
        let start = self.pos;
        let rest = &self.input[start..];
        let mut end = 0;
        for (offset, ch) in rest.char_indices() {
            let allowed = if offset == 0 {
                ch.is_alphabetic() || ch == '_' || ch == '$'
            } else {
                ch.is_alphanumeric() || matches!(ch, '_' | '$' | '.')
            };
            if !allowed {
                break;
            }
            end = offset + ch.len_utf8();
        }
        if end == 0 {
            return Err(self.error("expected a type name"));
        }
        let name = &rest[..end];
        if name.ends_with('.') || name.contains("..") {
            return Err(self.error("malformed qualified name"));
        }
        self.pos += end;
        Ok(name.to_string())
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.input[self.pos..].starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn error(&self, message: &str) -> ModelError {
        ModelError::Parse {
            input: self.input.to_string(),
            offset: self.pos,
            message: message.to_string(),
        }
    }
}

// =============================================================================
// TypeInput
// =============================================================================

/// Either an already resolved descriptor or a reference still to resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeInput {
    Resolved(ResolvedType),
    Reference(TypeReference),
}

impl From<ResolvedType> for TypeInput {
    fn from(ty: ResolvedType) -> Self {
        Self::Resolved(ty)
    }
}

impl From<TypeReference> for TypeInput {
    fn from(reference: TypeReference) -> Self {
        Self::Reference(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_generics_and_arrays() {
        let parsed = TypeReference::parse("java.util.Map<String, List<Widget>>[]").unwrap();
        let expected = TypeReference::array_of(TypeReference::generic(
            "java.util.Map",
            vec![
                TypeReference::named("String"),
                TypeReference::generic("List", vec![TypeReference::named("Widget")]),
            ],
        ));
        assert_eq!(parsed, expected);
    }

    #[test]
    fn display_round_trips_normalized_spacing() {
        let parsed: TypeReference = " Pair < A ,B[] > ".parse().unwrap();
        assert_eq!(parsed.to_string(), "Pair<A, B[]>");
    }

    #[test]
    fn nested_class_names_keep_dollar_sign() {
        let parsed = TypeReference::parse("com.acme.Outer$Inner").unwrap();
        assert_eq!(parsed, TypeReference::named("com.acme.Outer$Inner"));
    }

    #[test]
    fn rejects_malformed_references() {
        for input in ["", "List<", "List<A,>", "List<A> B", "Widget[", "com..acme", "<A>"] {
            let err = TypeReference::parse(input).unwrap_err();
            assert!(
                matches!(err, ModelError::Parse { .. }),
                "expected parse error for {input:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn rejects_excessive_nesting() {
        let depth = MAX_TYPE_REFERENCE_NESTING as usize + 1;
        let input = format!("{}X{}", "Box<".repeat(depth), ">".repeat(depth));
        assert_eq!(
            TypeReference::parse(&input),
            Err(ModelError::NestingTooDeep {
                limit: MAX_TYPE_REFERENCE_NESTING
            })
        );
    }

    #[test]
    fn depth_counts_names_and_dimensions() {
        assert_eq!(TypeReference::named("Widget").depth(), 1);
        assert_eq!(TypeReference::parse("List<Widget[]>").unwrap().depth(), 3);
        assert_eq!(TypeReference::parse("Box<Widget>[][]").unwrap().depth(), 4);
        assert_eq!(TypeReference::parse("Pair<A, Box<B>>").unwrap().depth(), 3);
    }

    #[test]
    fn nesting_limit_is_inclusive() {
        let limit = MAX_TYPE_REFERENCE_NESTING as usize;

        let generic = format!("{}X{}", "Box<".repeat(limit - 1), ">".repeat(limit - 1));
        assert_eq!(TypeReference::parse(&generic).unwrap().depth(), MAX_TYPE_REFERENCE_NESTING);

        let array = format!("X{}", "[]".repeat(limit - 1));
        assert_eq!(TypeReference::parse(&array).unwrap().depth(), MAX_TYPE_REFERENCE_NESTING);

        let too_wide = format!("X{}", "[]".repeat(limit));
        assert!(matches!(
            TypeReference::parse(&too_wide),
            Err(ModelError::NestingTooDeep { .. })
        ));
    }

    #[test]
    fn outer_dimensions_count_toward_inner_nesting() {
        // 1 + 3 per level: Box, and two dimensions around it.
        let nest = |levels: usize| {
            (0..levels).fold("Widget".to_string(), |inner, _| format!("Box<{inner}>[][]"))
        };

        assert_eq!(TypeReference::parse(&nest(20)).unwrap().depth(), 61);
        assert_eq!(
            TypeReference::parse(&nest(21)),
            Err(ModelError::NestingTooDeep {
                limit: MAX_TYPE_REFERENCE_NESTING
            })
        );
    }
}
