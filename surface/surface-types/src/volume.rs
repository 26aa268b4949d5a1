//! Dense 3D volume storage.

use std::ops::{Index, IndexMut};

use crate::error::{VolumeError, VolumeResult};

/// A dense, row-major 3D array.
///
/// Elements are addressed by `[x0, x1, x2]`. Axis `x2` varies fastest in the
/// backing buffer, so the linear index of `[i, j, k]` is
/// `(i * n1 + j) * n2 + k`. This is the layout of a C-ordered array and the
/// order in which [`Volume::true_indices`] visits voxels.
///
/// # Example
///
/// ```
/// use surface_types::Volume;
///
/// let mut mask = Volume::filled([4, 5, 6], false).unwrap();
/// mask[[1, 2, 3]] = true;
///
/// assert_eq!(mask.dims(), [4, 5, 6]);
/// assert_eq!(mask.count_true(), 1);
/// assert_eq!(mask.get([1, 2, 3]), Some(&true));
/// assert_eq!(mask.get([4, 0, 0]), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawVolume<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Volume<T> {
    dims: [usize; 3],
    data: Vec<T>,
}

/// Unchecked wire form of [`Volume`]; deserialisation goes through
/// [`Volume::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawVolume<T> {
    dims: [usize; 3],
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawVolume<T>> for Volume<T> {
    type Error = VolumeError;

    fn try_from(raw: RawVolume<T>) -> VolumeResult<Self> {
        Self::new(raw.dims, raw.data)
    }
}

/// Number of elements for `dims`, checking for overflow.
fn element_count(dims: [usize; 3]) -> VolumeResult<usize> {
    dims[0]
        .checked_mul(dims[1])
        .and_then(|n| n.checked_mul(dims[2]))
        .ok_or(VolumeError::TooLarge(dims))
}

impl<T> Volume<T> {
    /// Wraps an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::DataLength`] if `data.len()` differs from the
    /// product of `dims`.
    pub fn new(dims: [usize; 3], data: Vec<T>) -> VolumeResult<Self> {
        let expected = element_count(dims)?;
        if data.len() != expected {
            return Err(VolumeError::DataLength {
                dims,
                expected,
                found: data.len(),
            });
        }
        Ok(Self { dims, data })
    }

    /// Builds a volume by evaluating `f` at every coordinate in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::TooLarge`] if the element count overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use surface_types::Volume;
    ///
    /// let ramp = Volume::from_fn([2, 2, 3], |[_, _, k]| k).unwrap();
    /// assert_eq!(ramp.as_slice(), &[0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2]);
    /// ```
    pub fn from_fn(dims: [usize; 3], mut f: impl FnMut([usize; 3]) -> T) -> VolumeResult<Self> {
        let mut data = Vec::with_capacity(element_count(dims)?);
        for i in 0..dims[0] {
            for j in 0..dims[1] {
                for k in 0..dims[2] {
                    data.push(f([i, j, k]));
                }
            }
        }
        Ok(Self { dims, data })
    }

    /// Dimensions `[n0, n1, n2]`.
    #[must_use]
    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if any dimension is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Linear-index step for a unit move along each axis.
    #[must_use]
    pub const fn strides(&self) -> [usize; 3] {
        [self.dims[1] * self.dims[2], self.dims[2], 1]
    }

    /// Linear index of `coord`, or `None` if it lies outside the volume.
    #[must_use]
    pub fn linear_index(&self, coord: [usize; 3]) -> Option<usize> {
        if coord[0] < self.dims[0] && coord[1] < self.dims[1] && coord[2] < self.dims[2] {
            Some((coord[0] * self.dims[1] + coord[1]) * self.dims[2] + coord[2])
        } else {
            None
        }
    }

    /// Coordinate of a linear index.
    ///
    /// The caller must pass `index < self.len()`.
    #[must_use]
    pub const fn coord_of(&self, index: usize) -> [usize; 3] {
        let k = index % self.dims[2];
        let rest = index / self.dims[2];
        [rest / self.dims[1], rest % self.dims[1], k]
    }

    /// Element at `coord`, if inside the volume.
    #[must_use]
    pub fn get(&self, coord: [usize; 3]) -> Option<&T> {
        self.linear_index(coord).map(|idx| &self.data[idx])
    }

    /// Mutable element at `coord`, if inside the volume.
    pub fn get_mut(&mut self, coord: [usize; 3]) -> Option<&mut T> {
        self.linear_index(coord).map(|idx| &mut self.data[idx])
    }

    /// Backing buffer in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable backing buffer in storage order.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the volume and returns its buffer.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterates elements in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Applies `f` element-wise.
    #[must_use]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Volume<U> {
        Volume {
            dims: self.dims,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Fails unless `other` has the same dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::ShapeMismatch`] on differing dimensions.
    pub fn ensure_same_shape<U>(&self, other: &Volume<U>) -> VolumeResult<()> {
        if self.dims == other.dims {
            Ok(())
        } else {
            Err(VolumeError::shape_mismatch(self.dims, other.dims))
        }
    }

    /// Combines two same-shaped volumes element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::ShapeMismatch`] on differing dimensions.
    pub fn zip_map<U, V>(
        &self,
        other: &Volume<U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> VolumeResult<Volume<V>> {
        self.ensure_same_shape(other)?;
        Ok(Volume {
            dims: self.dims,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| f(a, b))
                .collect(),
        })
    }
}

impl<T: Clone> Volume<T> {
    /// Creates a volume with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::TooLarge`] if the element count overflows.
    pub fn filled(dims: [usize; 3], value: T) -> VolumeResult<Self> {
        Ok(Self {
            dims,
            data: vec![value; element_count(dims)?],
        })
    }
}

impl Volume<bool> {
    /// Number of `true` voxels.
    #[must_use]
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Returns `true` if at least one voxel is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.data.iter().any(|&v| v)
    }

    /// Linear indices of `true` voxels in storage order.
    pub fn true_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(idx, &v)| v.then_some(idx))
    }

    /// Coordinates of `true` voxels in storage order.
    pub fn true_coords(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.true_indices().map(|idx| self.coord_of(idx))
    }

    /// Voxel-wise OR.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::ShapeMismatch`] on differing dimensions.
    pub fn union(&self, other: &Self) -> VolumeResult<Self> {
        self.zip_map(other, |&a, &b| a | b)
    }

    /// Voxel-wise AND.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::ShapeMismatch`] on differing dimensions.
    pub fn intersection(&self, other: &Self) -> VolumeResult<Self> {
        self.zip_map(other, |&a, &b| a & b)
    }
}

impl<T> Index<[usize; 3]> for Volume<T> {
    type Output = T;

    fn index(&self, coord: [usize; 3]) -> &T {
        match self.linear_index(coord) {
            Some(idx) => &self.data[idx],
            None => panic!("coordinate {coord:?} outside volume {:?}", self.dims),
        }
    }
}

impl<T> IndexMut<[usize; 3]> for Volume<T> {
    fn index_mut(&mut self, coord: [usize; 3]) -> &mut T {
        match self.linear_index(coord) {
            Some(idx) => &mut self.data[idx],
            None => panic!("coordinate {coord:?} outside volume {:?}", self.dims),
        }
    }
}

impl<'a, T> IntoIterator for &'a Volume<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
