//! Input Series Abstraction
//!
//! Anything that can be viewed as a 1D series or a `(time, channel)` matrix of
//! `f64` can be handed to the dispatcher.

use ndarray::{ArrayBase, ArrayView1, ArrayView2, Data, Ix1, Ix2};

/// Borrowed view of an input series
#[derive(Debug, Clone)]
pub enum SeriesView<'a> {
    /// Single channel
    Vector(ArrayView1<'a, f64>),
    /// Rows are time steps, columns are channels
    Matrix(ArrayView2<'a, f64>),
}

impl SeriesView<'_> {
    /// Rank of the underlying array (1 or 2)
    pub fn ndim(&self) -> usize {
        match self {
            SeriesView::Vector(_) => 1,
            SeriesView::Matrix(_) => 2,
        }
    }

    /// Number of time steps
    pub fn len(&self) -> usize {
        match self {
            SeriesView::Vector(v) => v.len(),
            SeriesView::Matrix(m) => m.nrows(),
        }
    }

    /// Whether there are no time steps
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Materialize a value as a raw numeric series
pub trait AsSeries {
    /// Borrow the data as a vector or matrix view
    fn as_series(&self) -> SeriesView<'_>;

    /// Rank of the materialized array
    fn ndim(&self) -> usize {
        self.as_series().ndim()
    }

    /// Number of time steps
    fn len(&self) -> usize {
        self.as_series().len()
    }

    /// Whether there are no time steps
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AsSeries for [f64] {
    fn as_series(&self) -> SeriesView<'_> {
        SeriesView::Vector(ArrayView1::from(self))
    }
}

impl AsSeries for Vec<f64> {
    fn as_series(&self) -> SeriesView<'_> {
        self.as_slice().as_series()
    }
}

impl<S> AsSeries for ArrayBase<S, Ix1>
where
    S: Data<Elem = f64>,
{
    fn as_series(&self) -> SeriesView<'_> {
        SeriesView::Vector(self.view())
    }
}

impl<S> AsSeries for ArrayBase<S, Ix2>
where
    S: Data<Elem = f64>,
{
    fn as_series(&self) -> SeriesView<'_> {
        SeriesView::Matrix(self.view())
    }
}
