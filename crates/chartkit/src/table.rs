//! Columnar input data.

use chartkit_core::{ChartError, Result};
use chartkit_sources::ImageData;
use glam::IVec3;

/// Read access to named numeric columns.
pub trait TableSource {
    /// Number of rows.
    fn num_rows(&self) -> usize;

    /// A column by name.
    fn column(&self, name: &str) -> Option<&[f64]>;

    /// A column by name, or [`ChartError::ColumnNotFound`].
    fn require_column(&self, name: &str) -> Result<&[f64]> {
        self.column(name)
            .ok_or_else(|| ChartError::ColumnNotFound(name.to_string()))
    }
}

/// An in-memory table of `f64` columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Vec<f64>)>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column.
    ///
    /// Every column must have the same length, and names must be unique.
    pub fn add_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<&mut Self> {
        let name = name.into();
        if self.columns.iter().any(|(existing, _)| *existing == name) {
            return Err(ChartError::ColumnExists(name));
        }
        if let Some((_, first)) = self.columns.first() {
            if first.len() != values.len() {
                return Err(ChartError::SizeMismatch {
                    expected: first.len(),
                    actual: values.len(),
                });
            }
        }
        self.columns.push((name, values));
        Ok(self)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Flattens an image into `x`, `y`, `z` position columns plus one column
    /// named after the image's scalar array.
    pub fn from_image(image: &ImageData) -> Result<Self> {
        let extent = image.extent();
        let mut xs = Vec::with_capacity(image.scalars().len());
        let mut ys = Vec::with_capacity(image.scalars().len());
        let mut zs = Vec::with_capacity(image.scalars().len());
        for z in extent.min.z..=extent.max.z {
            for y in extent.min.y..=extent.max.y {
                for x in extent.min.x..=extent.max.x {
                    let position = image.position(IVec3::new(x, y, z));
                    xs.push(position.x);
                    ys.push(position.y);
                    zs.push(position.z);
                }
            }
        }

        let mut table = Self::new();
        table
            .add_column("x", xs)?
            .add_column("y", ys)?
            .add_column("z", zs)?
            .add_column(image.name(), image.scalars().iter().map(|&v| f64::from(v)).collect())?;
        Ok(table)
    }
}

impl TableSource for Table {
    fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, values)| values.len())
    }

    fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values.as_slice())
    }
}
