//! Destination element type descriptor

use crate::error::ElementTypeError;
use std::fmt;
use std::str::FromStr;

/// Highest destination rank accepted, leading dimension included
pub const MAX_RANK: usize = 32;

/// How the bytes of one destination slot are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int,
    UInt,
    Float,
    /// Raw fixed-width bytes (numpy `S`/`V`)
    Bytes,
}

impl ScalarKind {
    /// numpy type character
    pub fn code(self) -> char {
        match self {
            ScalarKind::Bool => 'b',
            ScalarKind::Int => 'i',
            ScalarKind::UInt => 'u',
            ScalarKind::Float => 'f',
            ScalarKind::Bytes => 'S',
        }
    }

    fn accepts_width(self, width: usize) -> bool {
        match self {
            ScalarKind::Bool => width == 1,
            ScalarKind::Int | ScalarKind::UInt => matches!(width, 1 | 2 | 4 | 8),
            ScalarKind::Float => matches!(width, 4 | 8),
            ScalarKind::Bytes => width > 0,
        }
    }
}

/// Element type of a dense array: kind, byte width and optional sub-array
///
/// With a sub-array the decoded array gains one dimension per entry of
/// `subarray`, and each slot still holds a single `width`-byte scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementType {
    pub kind: ScalarKind,
    pub width: usize,
    pub subarray: Option<Vec<usize>>,
}

impl ElementType {
    pub fn new(kind: ScalarKind, width: usize) -> Self {
        Self {
            kind,
            width,
            subarray: None,
        }
    }

    pub fn bool() -> Self {
        Self::new(ScalarKind::Bool, 1)
    }

    pub fn int(width: usize) -> Self {
        Self::new(ScalarKind::Int, width)
    }

    pub fn uint(width: usize) -> Self {
        Self::new(ScalarKind::UInt, width)
    }

    pub fn float(width: usize) -> Self {
        Self::new(ScalarKind::Float, width)
    }

    pub fn bytes(width: usize) -> Self {
        Self::new(ScalarKind::Bytes, width)
    }

    pub fn with_subarray(mut self, shape: Vec<usize>) -> Self {
        self.subarray = Some(shape);
        self
    }

    /// Sub-array dimensions, empty when the element is a plain scalar
    pub fn sub_shape(&self) -> &[usize] {
        self.subarray.as_deref().unwrap_or(&[])
    }

    /// Destination rank: leading dimension plus sub-array dimensions
    pub fn rank(&self) -> usize {
        1 + self.sub_shape().len()
    }

    /// Check that the kind/width pair is valid and the sub-array is usable
    pub fn validate(&self) -> Result<(), ElementTypeError> {
        if !self.kind.accepts_width(self.width) {
            return Err(ElementTypeError::InvalidWidth {
                kind: self.kind,
                width: self.width,
            });
        }
        if let Some(shape) = &self.subarray {
            if shape.is_empty() {
                return Err(ElementTypeError::EmptySubarray);
            }
            if 1 + shape.len() > MAX_RANK {
                return Err(ElementTypeError::RankTooLarge {
                    rank: 1 + shape.len(),
                    max: MAX_RANK,
                });
            }
            shape
                .iter()
                .try_fold(self.width, |acc, &dim| acc.checked_mul(dim))
                .ok_or(ElementTypeError::TooLarge)?;
        }
        Ok(())
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(shape) = &self.subarray {
            write!(f, "(")?;
            for (i, dim) in shape.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", dim)?;
            }
            if shape.len() == 1 {
                write!(f, ",")?;
            }
            write!(f, ")")?;
        }
        let order = if self.width == 1 || self.kind == ScalarKind::Bytes {
            '|'
        } else {
            '<'
        };
        write!(f, "{}{}{}", order, self.kind.code(), self.width)
    }
}

/// Parses numpy-style type strings: `"<i4"`, `"|S5"`, `"?"`, `"(3,)<f8"`
impl FromStr for ElementType {
    type Err = ElementTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ElementTypeError::Syntax(s.to_string());
        let s_trimmed = s.trim();

        let (subarray, rest) = match s_trimmed.strip_prefix('(') {
            Some(tail) => {
                let close = tail.find(')').ok_or_else(invalid)?;
                let dims = tail[..close]
                    .split(',')
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(|d| d.parse::<usize>().map_err(|_| invalid()))
                    .collect::<Result<Vec<_>, _>>()?;
                let dims = if dims.is_empty() { None } else { Some(dims) };
                (dims, &tail[close + 1..])
            }
            None => (None, s_trimmed),
        };

        let rest = match rest.chars().next() {
            Some('<' | '|' | '=') => &rest[1..],
            Some('>') => return Err(ElementTypeError::BigEndian),
            _ => rest,
        };

        let mut chars = rest.chars();
        let code = chars.next().ok_or_else(invalid)?;
        let digits = chars.as_str();

        let kind = match code {
            '?' | 'b' => ScalarKind::Bool,
            'i' => ScalarKind::Int,
            'u' => ScalarKind::UInt,
            'f' => ScalarKind::Float,
            'S' | 'a' | 'V' => ScalarKind::Bytes,
            other => return Err(ElementTypeError::UnknownKind(other)),
        };

        let width = match (code, digits) {
            ('?', "") => 1,
            (_, "") => return Err(invalid()),
            (_, d) => d.parse::<usize>().map_err(|_| invalid())?,
        };

        let element_type = ElementType {
            kind,
            width,
            subarray,
        };
        element_type.validate()?;
        Ok(element_type)
    }
}
