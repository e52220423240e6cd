use flo_raster::*;

use std::convert::{TryInto};

/// Current version of the cel blob format
const CEL_BLOB_VERSION: u32 = 1;

///
/// Encodes a cel's pixels as an opaque storage blob
///
/// Format: version word, width, height (little-endian u32s), then the raw RGBA
/// payload. The version word leads so later formats can be told apart when read
/// back.
///
pub fn encode_cel_blob(pixels: &SurfacePixels) -> Vec<u8> {
    let mut blob = Vec::with_capacity(12 + pixels.pixels().len());

    blob.extend_from_slice(&CEL_BLOB_VERSION.to_le_bytes());
    blob.extend_from_slice(&(pixels.width() as u32).to_le_bytes());
    blob.extend_from_slice(&(pixels.height() as u32).to_le_bytes());
    blob.extend_from_slice(pixels.pixels());

    blob
}

///
/// Decodes a cel blob back into pixels
///
/// Returns None for anything malformed: an unknown version, a truncated header
/// or a payload that does not match the stated dimensions. Callers treat that
/// as a missing cel rather than an error.
///
pub fn decode_cel_blob(blob: &[u8]) -> Option<SurfacePixels> {
    if blob.len() < 12 {
        return None;
    }

    let version = u32::from_le_bytes(blob[0..4].try_into().ok()?);
    if version != CEL_BLOB_VERSION {
        return None;
    }

    let width   = u32::from_le_bytes(blob[4..8].try_into().ok()?) as usize;
    let height  = u32::from_le_bytes(blob[8..12].try_into().ok()?) as usize;
    let payload = &blob[12..];

    if payload.len() != width * height * 4 {
        return None;
    }

    Some(SurfacePixels::from_pixels(width, height, payload.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_round_trips() {
        let mut surface = RasterSurface::new(4, 3);
        surface.set_pixel(2, 1, Rgba { r: 10, g: 20, b: 30, a: 200 });

        let blob    = encode_cel_blob(&surface.snapshot());
        let decoded = decode_cel_blob(&blob).unwrap();

        assert!(decoded == surface.snapshot());
    }

    #[test]
    fn truncated_blobs_are_rejected() {
        let surface = RasterSurface::new(4, 3);
        let blob    = encode_cel_blob(&surface.snapshot());

        assert!(decode_cel_blob(&blob[..8]).is_none());
        assert!(decode_cel_blob(&blob[..blob.len() - 1]).is_none());
        assert!(decode_cel_blob(&[]).is_none());
    }

    #[test]
    fn unknown_versions_are_rejected() {
        let surface     = RasterSurface::new(2, 2);
        let mut blob    = encode_cel_blob(&surface.snapshot());

        blob[0] = 99;
        assert!(decode_cel_blob(&blob).is_none());
    }
}
