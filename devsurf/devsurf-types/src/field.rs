//! Named per-node and per-cell field arrays.
//!
//! A [`Field`] is a flat array of `f64` tuples indexed consistently with the
//! mesh's node or cell order. A [`FieldSet`] holds the fields attached to one
//! side of a mesh (nodes or cells) under unique names.

use hashbrown::HashMap;

use crate::error::{MeshError, MeshResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named data array with a fixed number of components per tuple.
///
/// One component per tuple is a scalar field, three a vector field. Values
/// are stored flat: tuple `i` occupies `values[i * components .. (i + 1) * components]`.
///
/// # Example
///
/// ```
/// use devsurf_types::Field;
///
/// let pressure = Field::scalar("pressure", vec![1.0, 2.0, 3.0]);
/// assert_eq!(pressure.tuple_count(), 3);
/// assert_eq!(pressure.tuple(1), Some(&[2.0][..]));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Field {
    name: String,
    components: usize,
    values: Vec<f64>,
}

impl Field {
    /// Create a field with `components` values per tuple.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::ZeroComponents`] if `components` is zero, and
    /// [`MeshError::RaggedField`] if `values.len()` is not a multiple of
    /// `components`.
    pub fn new(name: impl Into<String>, components: usize, values: Vec<f64>) -> MeshResult<Self> {
        let name = name.into();
        if components == 0 {
            return Err(MeshError::ZeroComponents(name));
        }
        if values.len() % components != 0 {
            return Err(MeshError::RaggedField {
                name,
                values: values.len(),
                components,
            });
        }
        Ok(Self {
            name,
            components,
            values,
        })
    }

    /// Create a one-component (scalar) field.
    #[must_use]
    pub fn scalar(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            components: 1,
            values,
        }
    }

    /// Field name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of components per tuple.
    #[inline]
    #[must_use]
    pub const fn components(&self) -> usize {
        self.components
    }

    /// Number of tuples.
    #[inline]
    #[must_use]
    pub fn tuple_count(&self) -> usize {
        self.values.len() / self.components
    }

    /// Raw flat values.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The `index`-th tuple, or `None` if out of range.
    #[must_use]
    pub fn tuple(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.components)?;
        let end = start + self.components;
        self.values.get(start..end)
    }

    /// Gather tuples through an index map into a new field.
    ///
    /// Output tuple `i` is a copy of input tuple `map[i]`. The name and
    /// component layout are preserved. This is the resampling primitive used
    /// to carry field data onto a duplicated or reordered entity set.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::GatherOutOfRange`] if any map entry is not a
    /// valid tuple index.
    pub fn gather(&self, map: &[usize]) -> MeshResult<Self> {
        let tuples = self.tuple_count();
        let mut values = Vec::with_capacity(map.len() * self.components);
        for &src in map {
            let tuple = self.tuple(src).ok_or_else(|| MeshError::GatherOutOfRange {
                name: self.name.clone(),
                index: src,
                tuples,
            })?;
            values.extend_from_slice(tuple);
        }
        Ok(Self {
            name: self.name.clone(),
            components: self.components,
            values,
        })
    }
}

/// An ordered set of uniquely named fields.
///
/// Insertion order is preserved; lookups by name go through a hash index.
///
/// # Example
///
/// ```
/// use devsurf_types::{Field, FieldSet};
///
/// let mut fields = FieldSet::new();
/// fields.insert(Field::scalar("pressure", vec![0.5, 0.7])).unwrap();
/// assert!(fields.get("pressure").is_some());
/// assert!(fields.insert(Field::scalar("pressure", vec![])).is_err());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Field>", into = "Vec<Field>")
)]
pub struct FieldSet {
    fields: Vec<Field>,
    index: HashMap<String, usize>,
}

impl FieldSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the set holds no fields.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Insert a field.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DuplicateField`] if a field with the same name
    /// is already present.
    pub fn insert(&mut self, field: Field) -> MeshResult<()> {
        if self.index.contains_key(field.name()) {
            return Err(MeshError::DuplicateField(field.name().to_owned()));
        }
        self.index.insert(field.name().to_owned(), self.fields.len());
        self.fields.push(field);
        Ok(())
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    /// Iterate over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Gather every field through the same index map.
    ///
    /// # Errors
    ///
    /// Returns the first gather error encountered.
    pub fn gather(&self, map: &[usize]) -> MeshResult<Self> {
        let mut out = Self::new();
        for field in &self.fields {
            out.insert(field.gather(map)?)?;
        }
        Ok(out)
    }
}

impl TryFrom<Vec<Field>> for FieldSet {
    type Error = MeshError;

    fn try_from(fields: Vec<Field>) -> MeshResult<Self> {
        let mut out = Self::new();
        for field in fields {
            out.insert(field)?;
        }
        Ok(out)
    }
}

impl From<FieldSet> for Vec<Field> {
    fn from(set: FieldSet) -> Self {
        set.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_field_tuples() {
        let f = Field::scalar("t", vec![1.0, 2.0, 3.0]);
        assert_eq!(f.components(), 1);
        assert_eq!(f.tuple_count(), 3);
        assert_eq!(f.tuple(2), Some(&[3.0][..]));
        assert_eq!(f.tuple(3), None);
    }

    #[test]
    fn vector_field_tuples() {
        let f = Field::new("v", 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(f.is_ok());
        let f = f.unwrap();
        assert_eq!(f.tuple_count(), 2);
        assert_eq!(f.tuple(1), Some(&[4.0, 5.0, 6.0][..]));
    }

    #[test]
    fn ragged_field_rejected() {
        let err = Field::new("v", 3, vec![1.0, 2.0, 3.0, 4.0]);
        assert!(matches!(err, Err(MeshError::RaggedField { .. })));
    }

    #[test]
    fn zero_components_rejected() {
        let err = Field::new("v", 0, vec![]);
        assert!(matches!(err, Err(MeshError::ZeroComponents(_))));
    }

    #[test]
    fn gather_reorders_and_duplicates() {
        let f = Field::new("v", 2, vec![0.0, 0.1, 1.0, 1.1, 2.0, 2.1]).unwrap();
        let g = f.gather(&[2, 0, 0]).unwrap();
        assert_eq!(g.values(), &[2.0, 2.1, 0.0, 0.1, 0.0, 0.1]);
        assert_eq!(g.name(), "v");
    }

    #[test]
    fn gather_out_of_range() {
        let f = Field::scalar("t", vec![1.0]);
        assert!(matches!(
            f.gather(&[1]),
            Err(MeshError::GatherOutOfRange { .. })
        ));
    }

    #[test]
    fn field_set_rejects_duplicates() {
        let mut set = FieldSet::new();
        set.insert(Field::scalar("a", vec![1.0])).unwrap();
        let err = set.insert(Field::scalar("a", vec![2.0]));
        assert!(matches!(err, Err(MeshError::DuplicateField(_))));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn field_set_preserves_order() {
        let mut set = FieldSet::new();
        set.insert(Field::scalar("b", vec![1.0])).unwrap();
        set.insert(Field::scalar("a", vec![2.0])).unwrap();
        let names: Vec<&str> = set.iter().map(Field::name).collect();
        assert_eq!(names, ["b", "a"]);
        assert!(set.get("a").is_some());
        assert!(set.get("c").is_none());
    }

    #[test]
    fn field_set_gather_all() {
        let mut set = FieldSet::new();
        set.insert(Field::scalar("a", vec![1.0, 2.0])).unwrap();
        set.insert(Field::new("v", 2, vec![0.0, 0.1, 1.0, 1.1]).unwrap())
            .unwrap();
        let gathered = set.gather(&[1, 0]).unwrap();
        assert_eq!(gathered.get("a").unwrap().values(), &[2.0, 1.0]);
        assert_eq!(gathered.get("v").unwrap().values(), &[1.0, 1.1, 0.0, 0.1]);
    }
}
