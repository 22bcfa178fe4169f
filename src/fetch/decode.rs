//! Dimension decoding from image headers.

use crate::error::{Error, Result};

use super::{Dimensions, DimensionDecoder};

/// Reads dimensions from the image header with `imagesize`.
///
/// Only the leading bytes of the format header are parsed; pixel data is
/// never decoded. Unsupported or truncated input is a [`Error::Decode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageSizeDecoder;

impl DimensionDecoder for ImageSizeDecoder {
    fn decode_dimensions(&self, bytes: &[u8]) -> Result<Dimensions> {
        let size = imagesize::blob_size(bytes).map_err(|e| Error::Decode(e.to_string()))?;

        let width = u32::try_from(size.width).map_err(|e| Error::Decode(e.to_string()))?;
        let height = u32::try_from(size.height).map_err(|e| Error::Decode(e.to_string()))?;

        Ok(Dimensions { width, height })
    }
}
