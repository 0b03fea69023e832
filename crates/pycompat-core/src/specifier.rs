//! PEP 440 style version specifiers such as `>=3.8,<3.12`.
//!
//! A [`VersionConstraint`] is the parsed form of one `Requires-Python`
//! declaration: an ordered list of clauses that must all hold.

use std::fmt;
use std::str::FromStr;

use pycompat_util::errors::PycompatError;

use crate::version::PyVersion;

/// Comparison operator of a single clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    LessEqual,
    GreaterEqual,
    Less,
    Greater,
    /// `~=`, the compatible-release operator.
    Compatible,
}

impl Operator {
    /// Longest tokens first so `<=` is not read as `<`.
    const TOKENS: [(&'static str, Operator); 7] = [
        ("~=", Operator::Compatible),
        ("==", Operator::Equal),
        ("!=", Operator::NotEqual),
        ("<=", Operator::LessEqual),
        (">=", Operator::GreaterEqual),
        ("<", Operator::Less),
        (">", Operator::Greater),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Compatible => "~=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(operator, version)` pair, e.g. `>=3.8` or `!=3.9.*`.
#[derive(Debug, Clone)]
pub struct Clause {
    pub operator: Operator,
    pub version: PyVersion,
    /// Trailing `.*`; only valid with `==` and `!=`.
    pub wildcard: bool,
}

impl Clause {
    pub fn matches(&self, candidate: &PyVersion) -> bool {
        match self.operator {
            Operator::Equal if self.wildcard => candidate.has_prefix(self.version.release()),
            Operator::NotEqual if self.wildcard => !candidate.has_prefix(self.version.release()),
            Operator::Equal => candidate == &self.version,
            Operator::NotEqual => candidate != &self.version,
            Operator::LessEqual => candidate <= &self.version,
            Operator::GreaterEqual => candidate >= &self.version,
            Operator::Less => candidate < &self.version,
            Operator::Greater => candidate > &self.version,
            Operator::Compatible => {
                // ~=X.Y.Z  ==  >=X.Y.Z, ==X.Y.*
                let release = self.version.release();
                let prefix = &release[..release.len() - 1];
                candidate >= &self.version && candidate.has_prefix(prefix)
            }
        }
    }
}

impl FromStr for Clause {
    type Err = PycompatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("===") {
            return Err(PycompatError::Specifier {
                message: format!("arbitrary equality is not supported in '{s}'"),
            });
        }

        let (operator, rest) = Operator::TOKENS
            .iter()
            .find_map(|(token, op)| s.strip_prefix(token).map(|rest| (*op, rest.trim())))
            .ok_or_else(|| PycompatError::Specifier {
                message: format!("unknown operator in '{s}'"),
            })?;

        let (version_text, wildcard) = match rest.strip_suffix(".*") {
            Some(prefix) => (prefix, true),
            None => (rest, false),
        };

        if wildcard && !matches!(operator, Operator::Equal | Operator::NotEqual) {
            return Err(PycompatError::Specifier {
                message: format!("wildcard is only allowed with == and != in '{s}'"),
            });
        }

        let version: PyVersion = version_text.parse()?;
        if operator == Operator::Compatible && version.release().len() < 2 {
            return Err(PycompatError::Specifier {
                message: format!("~= needs at least two version components in '{s}'"),
            });
        }

        Ok(Self {
            operator,
            version,
            wildcard,
        })
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)?;
        if self.wildcard {
            f.write_str(".*")?;
        }
        Ok(())
    }
}

/// A comma-separated conjunction of clauses.
#[derive(Debug, Clone)]
pub struct VersionConstraint {
    clauses: Vec<Clause>,
}

impl VersionConstraint {
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// `true` when every clause holds. A constraint with no clauses admits
    /// everything.
    pub fn matches(&self, candidate: &PyVersion) -> bool {
        self.clauses.iter().all(|c| c.matches(candidate))
    }
}

impl FromStr for VersionConstraint {
    type Err = PycompatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let clauses = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Clause::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { clauses })
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.clauses.iter().map(ToString::to_string).collect();
        f.write_str(&parts.join(","))
    }
}
