//! NIfTI mask I/O.
//!
//! Masks are read from `.nii` or `.nii.gz` files (gzip is detected from the
//! magic bytes, not the extension). Every non-zero voxel becomes `true`.
//! Axis order follows the file: `x0` is the first NIfTI dimension.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use ndarray::{ArrayD, Axis, Ix3};
use nifti::volume::ndarray::IntoNdArray;
use nifti::{InMemNiftiObject, NiftiHeader, NiftiObject};
use surface_types::{Spacing, Volume, VolumeError, VolumeResult};
use tracing::debug;

use crate::error::{EvalError, EvalResult};

const HEADER_SIZE: usize = 348;
const VOX_OFFSET: usize = 352;
const DT_UINT8: i16 = 2;

/// A binary mask with the voxel spacing stored in its header.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskImage {
    /// Voxels with a non-zero value.
    pub mask: Volume<bool>,
    /// Header voxel size, or the reason it is not a valid spacing.
    pub spacing: VolumeResult<Spacing>,
}

fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[0] == 0x1f && bytes[1] == 0x8b
}

fn header_spacing(header: &NiftiHeader) -> VolumeResult<Spacing> {
    let pixdim = header.pixdim;
    Spacing::new(
        f64::from(pixdim[1]),
        f64::from(pixdim[2]),
        f64::from(pixdim[3]),
    )
}

/// Loads a binary mask from a NIfTI file.
///
/// An invalid header spacing does not fail the load; it is kept in
/// [`MaskImage::spacing`] for the caller to reject or override.
///
/// 3-D images are used as they are. A 4-D image is reduced to the volume at
/// `channel`; without a channel it is accepted only if its fourth
/// dimension is 1.
///
/// # Errors
///
/// Returns [`EvalError::Io`] if the file cannot be read,
/// [`EvalError::Nifti`] if it is not a NIfTI image,
/// [`EvalError::ChannelOutOfRange`] for a missing channel and
/// [`EvalError::UnsupportedShape`] for any other shape.
pub fn load_mask(path: impl AsRef<Path>, channel: Option<usize>) -> EvalResult<MaskImage> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| EvalError::io(path, e))?;
    decode_mask(&bytes, path, channel)
}

fn decode_mask(bytes: &[u8], path: &Path, channel: Option<usize>) -> EvalResult<MaskImage> {
    let object = if is_gzip(bytes) {
        InMemNiftiObject::from_reader(GzDecoder::new(bytes))
    } else {
        InMemNiftiObject::from_reader(bytes)
    }
    .map_err(|e| EvalError::nifti(path, e.to_string()))?;

    let spacing = header_spacing(object.header());
    let array: ArrayD<f64> = object
        .into_volume()
        .into_ndarray()
        .map_err(|e| EvalError::nifti(path, e.to_string()))?;

    let mask = binarize(array, path, channel)?;
    debug!(path = %path.display(), dims = ?mask.dims(), voxels = mask.count_true(), "loaded mask");
    Ok(MaskImage { mask, spacing })
}

/// Reduces a decoded image to a 3-D boolean volume.
fn binarize(array: ArrayD<f64>, path: &Path, channel: Option<usize>) -> EvalResult<Volume<bool>> {
    let shape = array.shape().to_vec();
    let unsupported = || EvalError::UnsupportedShape {
        path: path.to_path_buf(),
        shape: shape.clone(),
    };

    let volume = match (shape.len(), channel) {
        (3, _) => array,
        (4, Some(channel)) => {
            if channel >= shape[3] {
                return Err(EvalError::ChannelOutOfRange {
                    path: path.to_path_buf(),
                    channel,
                    channels: shape[3],
                });
            }
            array.index_axis_move(Axis(3), channel)
        }
        (4, None) if shape[3] == 1 => array.index_axis_move(Axis(3), 0),
        _ => return Err(unsupported()),
    };
    let volume = volume
        .into_dimensionality::<Ix3>()
        .map_err(|_| unsupported())?;

    let dims = [shape[0], shape[1], shape[2]];
    Ok(Volume::from_fn(dims, |[i, j, k]| volume[[i, j, k]] != 0.0)?)
}

/// Writes a mask as an uncompressed or gzipped (`.gz` extension) NIfTI-1
/// image of unsigned bytes.
///
/// # Errors
///
/// Returns [`EvalError::Volume`] if a dimension does not fit a NIfTI
/// header and [`EvalError::Io`] if writing fails.
pub fn write_mask(path: impl AsRef<Path>, mask: &Volume<bool>, spacing: &Spacing) -> EvalResult<()> {
    let path = path.as_ref();
    let bytes = encode_mask(mask, spacing)?;

    let file = File::create(path).map_err(|e| EvalError::io(path, e))?;
    let gzip = path.extension().is_some_and(|ext| ext == "gz");
    let result = if gzip {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        encoder
            .write_all(&bytes)
            .and_then(|()| encoder.finish())
            .and_then(|mut writer| writer.flush())
    } else {
        let mut writer = BufWriter::new(file);
        writer.write_all(&bytes).and_then(|()| writer.flush())
    };
    result.map_err(|e| EvalError::io(path, e))
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss
)]
fn encode_mask(mask: &Volume<bool>, spacing: &Spacing) -> EvalResult<Vec<u8>> {
    let dims = mask.dims();
    let mut dim = [3_i16, 1, 1, 1, 1, 1, 1, 1];
    for (slot, &n) in dim[1..4].iter_mut().zip(&dims) {
        *slot = i16::try_from(n).map_err(|_| VolumeError::TooLarge(dims))?;
    }

    let mut header = [0_u8; HEADER_SIZE];
    header[0..4].copy_from_slice(&(HEADER_SIZE as i32).to_le_bytes());
    for (i, d) in dim.iter().enumerate() {
        header[40 + 2 * i..42 + 2 * i].copy_from_slice(&d.to_le_bytes());
    }
    header[70..72].copy_from_slice(&DT_UINT8.to_le_bytes());
    header[72..74].copy_from_slice(&8_i16.to_le_bytes());
    let s = spacing.as_array();
    let pixdim = [1.0, s[0] as f32, s[1] as f32, s[2] as f32, 1.0, 1.0, 1.0, 1.0];
    for (i, p) in pixdim.iter().enumerate() {
        header[76 + 4 * i..80 + 4 * i].copy_from_slice(&p.to_le_bytes());
    }
    header[108..112].copy_from_slice(&(VOX_OFFSET as f32).to_le_bytes());
    header[112..116].copy_from_slice(&1.0_f32.to_le_bytes());
    header[344..348].copy_from_slice(b"n+1\0");

    let mut bytes = Vec::with_capacity(VOX_OFFSET + mask.len());
    bytes.extend_from_slice(&header);
    bytes.extend_from_slice(&[0_u8; VOX_OFFSET - HEADER_SIZE]);

    // NIfTI stores the first dimension fastest.
    for k in 0..dims[2] {
        for j in 0..dims[1] {
            for i in 0..dims[0] {
                bytes.push(u8::from(mask[[i, j, k]]));
            }
        }
    }
    Ok(bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_mask() -> Volume<bool> {
        Volume::from_fn([4, 3, 2], |[i, j, k]| (i + 2 * j + k) % 3 == 0).unwrap()
    }

    /// Raw NIfTI-1 bytes for an arbitrary-rank uint8 image in file order.
    fn raw_nifti(shape: &[i16], data: &[u8]) -> Vec<u8> {
        let mut header = [0_u8; HEADER_SIZE];
        header[0..4].copy_from_slice(&348_i32.to_le_bytes());
        let mut dim = [1_i16; 8];
        dim[0] = i16::try_from(shape.len()).unwrap();
        dim[1..=shape.len()].copy_from_slice(shape);
        for (i, d) in dim.iter().enumerate() {
            header[40 + 2 * i..42 + 2 * i].copy_from_slice(&d.to_le_bytes());
        }
        header[70..72].copy_from_slice(&DT_UINT8.to_le_bytes());
        header[72..74].copy_from_slice(&8_i16.to_le_bytes());
        for i in 0..8 {
            header[76 + 4 * i..80 + 4 * i].copy_from_slice(&1.0_f32.to_le_bytes());
        }
        header[108..112].copy_from_slice(&352.0_f32.to_le_bytes());
        header[112..116].copy_from_slice(&1.0_f32.to_le_bytes());
        header[344..348].copy_from_slice(b"n+1\0");

        let mut bytes = header.to_vec();
        bytes.extend_from_slice(&[0; 4]);
        bytes.extend_from_slice(data);
        bytes
    }

    #[test]
    fn test_round_trip_plain_and_gzip() {
        let dir = tempdir().unwrap();
        let mask = sample_mask();
        let spacing = Spacing::new(2.0, 1.0, 0.5).unwrap();

        for name in ["mask.nii", "mask.nii.gz"] {
            let path = dir.path().join(name);
            write_mask(&path, &mask, &spacing).unwrap();
            let image = load_mask(&path, None).unwrap();
            assert_eq!(image.mask, mask);
            assert_eq!(image.spacing, Ok(spacing));
        }

        let gz = fs::read(dir.path().join("mask.nii.gz")).unwrap();
        assert!(is_gzip(&gz));
    }

    #[test]
    fn test_zero_header_spacing_is_reported() {
        let mut bytes = encode_mask(&sample_mask(), &Spacing::unit()).unwrap();
        // pixdim[1]
        bytes[80..84].copy_from_slice(&0.0_f32.to_le_bytes());

        let image = decode_mask(&bytes, Path::new("mask.nii"), None).unwrap();
        assert_eq!(image.mask, sample_mask());
        assert_eq!(
            image.spacing,
            Err(VolumeError::InvalidSpacing { axis: 0, value: 0.0 })
        );
    }

    #[test]
    fn test_first_axis_is_fastest_on_disk() {
        // Values 0, 7, 0, 0, 0, 9 over a 2x3x1 image.
        let bytes = raw_nifti(&[2, 3, 1], &[0, 7, 0, 0, 0, 9]);
        let image = decode_mask(&bytes, Path::new("m.nii"), None).unwrap();
        assert_eq!(image.mask.dims(), [2, 3, 1]);
        assert!(image.mask[[1, 0, 0]]);
        assert!(image.mask[[1, 2, 0]]);
        assert_eq!(image.mask.count_true(), 2);
    }

    #[test]
    fn test_channel_selection() {
        // 2x1x1 image with two channels: [1, 0] and [0, 1].
        let bytes = raw_nifti(&[2, 1, 1, 2], &[1, 0, 0, 1]);
        let path = Path::new("pred.nii");

        let first = decode_mask(&bytes, path, Some(0)).unwrap();
        assert_eq!(first.mask.as_slice(), &[true, false]);
        let second = decode_mask(&bytes, path, Some(1)).unwrap();
        assert_eq!(second.mask.as_slice(), &[false, true]);

        assert!(matches!(
            decode_mask(&bytes, path, Some(2)),
            Err(EvalError::ChannelOutOfRange { channels: 2, .. })
        ));
        assert!(matches!(
            decode_mask(&bytes, path, None),
            Err(EvalError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn test_single_channel_without_selection() {
        let bytes = raw_nifti(&[2, 2, 1, 1], &[0, 1, 1, 0]);
        let image = decode_mask(&bytes, Path::new("pred.nii"), None).unwrap();
        assert_eq!(image.mask.dims(), [2, 2, 1]);
        assert_eq!(image.mask.count_true(), 2);
    }

    #[test]
    fn test_two_dimensional_image_rejected() {
        let bytes = raw_nifti(&[2, 2], &[0, 1, 1, 0]);
        assert!(matches!(
            decode_mask(&bytes, Path::new("slice.nii"), None),
            Err(EvalError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.nii.gz");
        assert!(matches!(load_mask(&missing, None), Err(EvalError::Io { .. })));

        let garbage = dir.path().join("garbage.nii");
        fs::write(&garbage, b"not a nifti file").unwrap();
        assert!(matches!(load_mask(&garbage, None), Err(EvalError::Nifti { .. })));
    }
}
