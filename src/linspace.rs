use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Linspace] iterator
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinspaceIter {
    index: usize,
    size: usize,
    linspace: Linspace,
}

impl Iterator for LinspaceIter {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.size {
            return None;
        }

        let value = self.linspace.start + self.index as f64 * self.linspace.spacing;
        self.index += 1;

        Some(value)
    }
}

/// Linear space starting from `start` ranging to `end` (included),
/// used to define evaluation grids (in decimal degrees).
/// Deserialization goes through [Linspace::new].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LinspaceFields"))]
pub struct Linspace {
    /// First value
    pub start: f64,

    /// Last value (included)
    pub end: f64,

    /// Spacing (increment)
    pub spacing: f64,
}

/// Raw [Linspace] fields, prior validation.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct LinspaceFields {
    start: f64,
    end: f64,
    spacing: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<LinspaceFields> for Linspace {
    type Error = Error;

    fn try_from(fields: LinspaceFields) -> Result<Self, Self::Error> {
        Self::new(fields.start, fields.end, fields.spacing)
    }
}

impl Linspace {
    /// Builds a new [Linspace]. Spacing must be a positive finite number.
    pub fn new(start: f64, end: f64, spacing: f64) -> Result<Self, Error> {
        let linspace = Self {
            start: start.min(end),
            end: start.max(end),
            spacing,
        };

        linspace.validate()?;
        Ok(linspace)
    }

    /// Verifies this [Linspace] can be iterated: finite bounds
    /// and positive finite spacing.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(Error::InvalidGridSpacing);
        }

        if !self.start.is_finite() || !self.end.is_finite() || self.end < self.start {
            return Err(Error::InvalidGridSpacing);
        }

        Ok(())
    }

    /// Returns total width of this [Linspace]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Returns number of points in this [Linspace].
    /// Points within 1e-9 spacing of [Self::end] are included.
    /// An invalid [Linspace] (see [Self::validate]) is empty.
    pub fn len(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        (((self.width() / self.spacing) + 1.0E-9).floor() as usize).saturating_add(1)
    }

    /// Returns true if this [Linspace] contains no point.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if this [Linspace] is made of a single point.
    pub fn is_single_point(&self) -> bool {
        self.len() == 1
    }

    /// Iterates all points of this [Linspace], in ascending order.
    pub fn iter(&self) -> LinspaceIter {
        LinspaceIter {
            index: 0,
            size: self.len(),
            linspace: *self,
        }
    }
}
