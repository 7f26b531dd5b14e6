//! Borrowed plane and picture views.
//!
//! Plane storage always belongs to the caller. These types pair a byte slice
//! with its row pitch so the geometry operations can walk rows without
//! knowing where the memory came from:
//!
//! - [`PlaneRef`] / [`PlaneMut`] - one plane, shared or exclusive
//! - [`Picture`] / [`PictureMut`] - up to four planes of one image
//!
//! # Memory Layout
//!
//! Row `y` of a plane starts at byte `y * stride`. Only the first
//! `row_bytes` of each row are meaningful; the rest is padding:
//!
//! ```text
//! |<------ stride ------>|
//! [Y Y Y Y Y Y . . . . . ]  <- row 0
//! [Y Y Y Y Y Y . . . . . ]  <- row 1
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pixfmt_core::plane::{Picture, PlaneRef};
//!
//! let luma = vec![16u8; 64 * 48];
//! let chroma = vec![128u8; 32 * 24];
//! let pic = Picture::new(&[
//!     PlaneRef::new(&luma, 64),
//!     PlaneRef::new(&chroma, 32),
//!     PlaneRef::new(&chroma, 32),
//! ]);
//! assert_eq!(pic.plane_count(), 3);
//! assert_eq!(pic.plane(1).unwrap().row(0, 32)[0], 128);
//! ```

use crate::{Error, Result};

/// Maximum number of planes in a picture.
pub const MAX_PLANES: usize = 4;

/// Bytes a plane of `rows` rows of `row_bytes` needs with `stride`.
#[inline]
fn required_len(stride: usize, row_bytes: usize, rows: usize) -> usize {
    if rows == 0 {
        0
    } else {
        (rows - 1) * stride + row_bytes
    }
}

fn check_geometry(index: usize, len: usize, stride: usize, row_bytes: usize, rows: usize) -> Result<()> {
    if rows > 1 && stride < row_bytes {
        return Err(Error::invalid_stride(stride, row_bytes));
    }
    let needed = required_len(stride, row_bytes, rows);
    if len < needed {
        return Err(Error::buffer_too_small(index, len, needed));
    }
    Ok(())
}

/// Shared view of one plane.
#[derive(Debug, Clone, Copy)]
pub struct PlaneRef<'a> {
    data: &'a [u8],
    stride: usize,
}

impl<'a> PlaneRef<'a> {
    /// Wraps `data` with row pitch `stride`.
    #[inline]
    pub fn new(data: &'a [u8], stride: usize) -> Self {
        Self { data, stride }
    }

    /// Underlying bytes, starting at the first pixel.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Row pitch in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// First `len` bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the buffer.
    #[inline]
    pub fn row(&self, y: usize, len: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + len]
    }

    /// Same plane with its base moved `offset` bytes forward.
    ///
    /// # Errors
    ///
    /// [`Error::BufferTooSmall`] if `offset` is past the end.
    pub fn advance(&self, index: usize, offset: usize) -> Result<Self> {
        let data = self
            .data
            .get(offset..)
            .ok_or_else(|| Error::buffer_too_small(index, self.data.len(), offset))?;
        Ok(Self {
            data,
            stride: self.stride,
        })
    }

    /// Checks the plane can hold `rows` rows of `row_bytes`.
    pub fn require(&self, index: usize, row_bytes: usize, rows: usize) -> Result<()> {
        check_geometry(index, self.data.len(), self.stride, row_bytes, rows)
    }
}

/// Exclusive view of one plane.
#[derive(Debug)]
pub struct PlaneMut<'a> {
    data: &'a mut [u8],
    stride: usize,
}

impl<'a> PlaneMut<'a> {
    /// Wraps `data` with row pitch `stride`.
    #[inline]
    pub fn new(data: &'a mut [u8], stride: usize) -> Self {
        Self { data, stride }
    }

    /// Row pitch in bytes.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Underlying bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        self.data
    }

    /// Underlying bytes, mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data
    }

    /// Shared view of the same plane.
    #[inline]
    pub fn as_ref(&self) -> PlaneRef<'_> {
        PlaneRef::new(self.data, self.stride)
    }

    /// Shorter-lived exclusive view of the same plane.
    #[inline]
    pub fn reborrow(&mut self) -> PlaneMut<'_> {
        PlaneMut::new(self.data, self.stride)
    }

    /// Consumes the view, returning it with its base moved `offset` bytes.
    ///
    /// # Errors
    ///
    /// [`Error::BufferTooSmall`] if `offset` is past the end.
    pub fn advance(self, index: usize, offset: usize) -> Result<PlaneMut<'a>> {
        let len = self.data.len();
        let data = self
            .data
            .get_mut(offset..)
            .ok_or_else(|| Error::buffer_too_small(index, len, offset))?;
        Ok(PlaneMut {
            data,
            stride: self.stride,
        })
    }

    /// First `len` bytes of row `y`, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the row lies outside the buffer.
    #[inline]
    pub fn row_mut(&mut self, y: usize, len: usize) -> &mut [u8] {
        let start = y * self.stride;
        &mut self.data[start..start + len]
    }

    /// Checks the plane can hold `rows` rows of `row_bytes`.
    pub fn require(&self, index: usize, row_bytes: usize, rows: usize) -> Result<()> {
        check_geometry(index, self.data.len(), self.stride, row_bytes, rows)
    }
}

/// Shared view of up to [`MAX_PLANES`] planes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Picture<'a> {
    planes: [Option<PlaneRef<'a>>; MAX_PLANES],
}

impl<'a> Picture<'a> {
    /// Builds a picture from planes in order (luma, chroma..., alpha).
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_PLANES`] planes are given.
    pub fn new(planes: &[PlaneRef<'a>]) -> Self {
        assert!(planes.len() <= MAX_PLANES, "at most {MAX_PLANES} planes");
        let mut pic = Self::default();
        for (slot, plane) in pic.planes.iter_mut().zip(planes) {
            *slot = Some(*plane);
        }
        pic
    }

    /// Plane `index`, if present.
    #[inline]
    pub fn plane(&self, index: usize) -> Option<PlaneRef<'a>> {
        self.planes.get(index).copied().flatten()
    }

    /// Plane `index`, or [`Error::BufferTooSmall`] when missing.
    pub fn require_plane(&self, index: usize) -> Result<PlaneRef<'a>> {
        self.plane(index)
            .ok_or_else(|| Error::buffer_too_small(index, 0, 1))
    }

    /// Number of leading planes present.
    pub fn plane_count(&self) -> usize {
        self.planes.iter().take_while(|p| p.is_some()).count()
    }

    /// Replaces plane `index`.
    pub fn set_plane(&mut self, index: usize, plane: PlaneRef<'a>) {
        self.planes[index] = Some(plane);
    }
}

/// Exclusive view of up to [`MAX_PLANES`] planes.
#[derive(Debug, Default)]
pub struct PictureMut<'a> {
    planes: [Option<PlaneMut<'a>>; MAX_PLANES],
}

impl<'a> PictureMut<'a> {
    /// Builds a picture from planes in order (luma, chroma..., alpha).
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_PLANES`] planes are given.
    pub fn new(planes: Vec<PlaneMut<'a>>) -> Self {
        assert!(planes.len() <= MAX_PLANES, "at most {MAX_PLANES} planes");
        let mut pic = Self::default();
        for (slot, plane) in pic.planes.iter_mut().zip(planes) {
            *slot = Some(plane);
        }
        pic
    }

    /// Plane `index`, if present.
    #[inline]
    pub fn plane_mut(&mut self, index: usize) -> Option<&mut PlaneMut<'a>> {
        self.planes.get_mut(index).and_then(Option::as_mut)
    }

    /// Number of leading planes present.
    pub fn plane_count(&self) -> usize {
        self.planes.iter().take_while(|p| p.is_some()).count()
    }

    /// Shared view of every plane.
    pub fn as_picture(&self) -> Picture<'_> {
        let mut pic = Picture::default();
        for (slot, plane) in pic.planes.iter_mut().zip(&self.planes) {
            *slot = plane.as_ref().map(PlaneMut::as_ref);
        }
        pic
    }

    /// The first `count` planes as exclusive views.
    ///
    /// # Errors
    ///
    /// [`Error::BufferTooSmall`] naming the first missing plane.
    pub fn planes_mut(&mut self, count: usize) -> Result<Vec<&mut PlaneMut<'a>>> {
        let mut out = Vec::with_capacity(count);
        for (index, slot) in self.planes.iter_mut().take(count).enumerate() {
            out.push(slot.as_mut().ok_or_else(|| Error::buffer_too_small(index, 0, 1))?);
        }
        if out.len() < count {
            return Err(Error::buffer_too_small(out.len(), 0, 1));
        }
        Ok(out)
    }

    /// Takes the planes out, leaving the picture empty.
    pub fn into_planes(self) -> [Option<PlaneMut<'a>>; MAX_PLANES] {
        self.planes
    }
}
