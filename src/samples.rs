//! Read-only views over sample arrays.

use crate::utils::check_num;
use anyhow::{Context, Result};
use std::{iter::Copied, ops::Range, slice::Iter};

/// Selection of samples from a caller-owned array.
///
/// Either the whole array or an index subset of it. Subset indices are
/// checked once, when the view is built, so every statistic can index the
/// array without further bounds concerns.
#[derive(Debug, Clone, Copy)]
pub struct Samples<'a> {
    data: &'a [f64],
    subset: Option<&'a [usize]>,
}

impl<'a> Samples<'a> {
    /// View over every element of `data`.
    pub fn new(data: &'a [f64]) -> Self {
        Self { data, subset: None }
    }

    /// View over the elements of `data` at the positions in `subset`.
    ///
    /// # Errors
    /// Returns an error if any index is out of range for `data`.
    pub fn with_subset(data: &'a [f64], subset: &'a [usize]) -> Result<Self> {
        for (i_pos, &idx) in subset.iter().enumerate() {
            check_num(idx, 0..data.len())
                .with_context(|| format!("invalid subset index at position {i_pos}"))?;
        }
        Ok(Self::from_checked(data, subset))
    }

    /// View over `data`, restricted to `subset` when one is given.
    ///
    /// # Errors
    /// Same as [`Samples::with_subset`].
    pub fn from_parts(data: &'a [f64], subset: Option<&'a [usize]>) -> Result<Self> {
        match subset {
            None => Ok(Self::new(data)),
            Some(subset) => Self::with_subset(data, subset),
        }
    }

    pub(crate) fn from_checked(data: &'a [f64], subset: &'a [usize]) -> Self {
        Self {
            data,
            subset: Some(subset),
        }
    }

    /// Underlying array, including unselected elements.
    pub fn data(&self) -> &'a [f64] {
        self.data
    }

    /// Number of selected samples.
    pub fn len(&self) -> usize {
        match self.subset {
            None => self.data.len(),
            Some(subset) => subset.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Array positions of the selected samples, in selection order.
    pub fn indices(&self) -> Indices<'a> {
        match self.subset {
            None => Indices::Full(0..self.data.len()),
            Some(subset) => Indices::Subset(subset.iter().copied()),
        }
    }

    /// Values of the selected samples, in selection order.
    pub fn values(&self) -> impl Iterator<Item = f64> + use<'a> {
        let data = self.data;
        self.indices().map(move |idx| data[idx])
    }
}

impl<'a> From<&'a [f64]> for Samples<'a> {
    fn from(data: &'a [f64]) -> Self {
        Self::new(data)
    }
}

/// Iterator over the array positions of a [`Samples`] view.
#[derive(Debug, Clone)]
pub enum Indices<'a> {
    Full(Range<usize>),
    Subset(Copied<Iter<'a, usize>>),
}

impl Iterator for Indices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self {
            Indices::Full(range) => range.next(),
            Indices::Subset(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Indices::Full(range) => range.size_hint(),
            Indices::Subset(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Indices<'_> {}
