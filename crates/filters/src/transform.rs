use std::fmt;
use std::slice;
use std::str::FromStr;

use crate::ConfigError;
use crate::case::CaseDirection;

/// Text conversion that can be applied to the copied stream.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Transform {
    /// Map every character to lower case (`lower_case`).
    LowerCase,
    /// Map every character to upper case (`upper_case`).
    UpperCase,
    /// Drop leading and trailing whitespace and collapse internal runs
    /// (`trim_spaces`).
    TrimSpaces,
}

impl Transform {
    /// Every supported transform, in the order they are documented.
    pub const ALL: [Self; 3] = [Self::LowerCase, Self::UpperCase, Self::TrimSpaces];

    /// Returns the name accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LowerCase => "lower_case",
            Self::UpperCase => "upper_case",
            Self::TrimSpaces => "trim_spaces",
        }
    }

    /// Returns the case direction for case-folding transforms.
    #[must_use]
    pub const fn case_direction(self) -> Option<CaseDirection> {
        match self {
            Self::LowerCase => Some(CaseDirection::Lower),
            Self::UpperCase => Some(CaseDirection::Upper),
            Self::TrimSpaces => None,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|transform| transform.name() == name)
            .ok_or_else(|| ConfigError::UnknownTransform(name.to_owned()))
    }
}

/// Validated, ordered list of transforms.
///
/// The list preserves the order in which transforms were requested so the
/// chain applies them left to right. Construction rejects a list that asks
/// for both case directions; a valid list therefore never contains
/// [`Transform::LowerCase`] and [`Transform::UpperCase`] together.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TransformList {
    transforms: Vec<Transform>,
}

impl TransformList {
    /// Returns an empty list; the chain built from it is a passthrough.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Validates an ordered sequence of already-parsed transforms.
    pub fn from_transforms<I>(transforms: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Transform>,
    {
        let transforms: Vec<Transform> = transforms.into_iter().collect();

        let wants_lower = transforms.contains(&Transform::LowerCase);
        let wants_upper = transforms.contains(&Transform::UpperCase);
        if wants_lower && wants_upper {
            return Err(ConfigError::ConflictingCase);
        }

        Ok(Self { transforms })
    }

    /// Parses individual transform names, e.g. the values of repeated
    /// `--conv` flags.
    pub fn parse_names<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let transforms = names
            .into_iter()
            .map(|name| name.as_ref().parse::<Transform>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_transforms(transforms)
    }

    /// Parses a comma-separated list such as `upper_case,trim_spaces`.
    ///
    /// An empty string yields an empty list. Empty segments (`a,,b`) are
    /// rejected as unknown transforms.
    pub fn parse(list: &str) -> Result<Self, ConfigError> {
        if list.is_empty() {
            return Ok(Self::new());
        }
        Self::parse_names(list.split(','))
    }

    /// Returns the transforms in application order.
    #[must_use]
    pub fn as_slice(&self) -> &[Transform] {
        &self.transforms
    }

    /// Iterates over the transforms in application order.
    pub fn iter(&self) -> slice::Iter<'_, Transform> {
        self.transforms.iter()
    }

    /// Number of transforms in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Reports whether the list requests no transformation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

impl FromStr for TransformList {
    type Err = ConfigError;

    fn from_str(list: &str) -> Result<Self, Self::Err> {
        Self::parse(list)
    }
}

impl<'a> IntoIterator for &'a TransformList {
    type Item = &'a Transform;
    type IntoIter = slice::Iter<'a, Transform>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TransformList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, transform) in self.transforms.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(transform.name())?;
        }
        Ok(())
    }
}
