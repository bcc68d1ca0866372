//! Parsers for semi-structured catalog text.

use std::fmt;
use std::sync::LazyLock;

use nom::{
    IResult,
    bytes::complete::take_till1,
    character::complete::{char, digit1, multispace0},
    combinator::{map_res, opt},
    multi::separated_list1,
    sequence::{delimited, tuple},
};
use regex::Regex;
use serde::Serialize;

use crate::error::{DialectError, DialectResult};
use crate::types::{TypeDescriptor, TypeKind};

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)\.(\d+)").unwrap());

/// A catalog type string split into its base name and numeric arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeText {
    pub name: String,
    pub args: Vec<u32>,
}

/// Split `VARCHAR(50)` into `VARCHAR` and `[50]`.
///
/// A parenthesised suffix that is not a numeric list (`SET_OF(INTEGER)`)
/// is stripped and yields no arguments. Text without a leading type name
/// is a parse error.
pub fn parse_type_text(text: &str) -> DialectResult<TypeText> {
    let text = text.trim();
    match type_text(text) {
        Ok((_, parsed)) if !parsed.name.is_empty() => Ok(parsed),
        Ok(_) => Err(DialectError::parse(0, "expected a type name")),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(DialectError::parse(
            text.len() - e.input.len(),
            "expected a type name",
        )),
        Err(nom::Err::Incomplete(_)) => {
            Err(DialectError::parse(text.len(), "unexpected end of type text"))
        }
    }
}

fn type_text(input: &str) -> IResult<&str, TypeText> {
    let (input, name) = take_till1(|c: char| c == '(')(input)?;
    let (input, args) = opt(delimited(
        char('('),
        separated_list1(
            tuple((multispace0, char(','), multispace0)),
            map_res(digit1, str::parse::<u32>),
        ),
        char(')'),
    ))(input)?;
    Ok((
        input,
        TypeText {
            name: name.trim().to_string(),
            args: args.unwrap_or_default(),
        },
    ))
}

/// Resolve catalog type text to a descriptor. `Ok(None)` is a well-formed
/// name the registry does not know.
pub fn descriptor_from_type_text(text: &str) -> DialectResult<Option<TypeDescriptor>> {
    let parsed = parse_type_text(text)?;
    let Some(kind) = TypeKind::from_catalog_name(&parsed.name) else {
        return Ok(None);
    };
    let first = parsed.args.first().copied();
    let second = parsed.args.get(1).copied();
    let varying = parsed.name.to_ascii_uppercase().contains("VARYING");

    let descriptor = match kind {
        TypeKind::Numeric => TypeDescriptor::numeric(first, second),
        TypeKind::Decimal => TypeDescriptor::decimal(first, second),
        TypeKind::Float => TypeDescriptor::float(first),
        TypeKind::Bit if varying => TypeDescriptor::bit_varying(first),
        TypeKind::Bit => TypeDescriptor::bit(first),
        TypeKind::Char => TypeDescriptor::char(first),
        TypeKind::Varchar => TypeDescriptor::varchar(first),
        TypeKind::NChar => TypeDescriptor::nchar(first),
        TypeKind::NVarchar => TypeDescriptor::nvarchar(first),
        other => TypeDescriptor::new(other),
    };
    Ok(Some(descriptor))
}

/// Server version as four dot-separated integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ServerVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
}

impl ServerVersion {
    /// Find the first `a.b.c.d` run in `text`.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = VERSION_RE.captures(text)?;
        let part = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
        Some(Self {
            major: part(1)?,
            minor: part(2)?,
            patch: part(3)?,
            build: part(4)?,
        })
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.patch, self.build)
    }
}
