use super::color::*;
use super::surface::*;

///
/// Source-over composites `src` onto `dest`, with an extra scalar opacity
/// applied to the source
///
/// Both surfaces are straight-alpha; the blend premultiplies on the fly. The
/// surfaces must be the same size.
///
pub fn blend_over(dest: &mut RasterSurface, src: &RasterSurface, opacity: f32) {
    assert!(dest.width() == src.width() && dest.height() == src.height(), "blend between mismatched surfaces");

    if opacity <= 0.0 {
        return;
    }
    let opacity = opacity.min(1.0);

    let src_pixels  = src.pixels();
    let dest_pixels = dest.pixels_mut();

    for (dest_px, src_px) in dest_pixels.chunks_exact_mut(4).zip(src_pixels.chunks_exact(4)) {
        let src_alpha = (src_px[3] as f32 / 255.0) * opacity;
        if src_alpha <= 0.0 {
            continue;
        }

        let dest_alpha  = dest_px[3] as f32 / 255.0;
        let out_alpha   = src_alpha + dest_alpha * (1.0 - src_alpha);

        for channel in 0..3 {
            let src_c   = src_px[channel] as f32;
            let dest_c  = dest_px[channel] as f32;
            let out_c   = (src_c * src_alpha + dest_c * dest_alpha * (1.0 - src_alpha)) / out_alpha;

            dest_px[channel] = out_c.round().clamp(0.0, 255.0) as u8;
        }

        dest_px[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

///
/// Destination-in: scales the alpha of `dest` by the alpha of `mask`,
/// leaving the colour channels alone
///
/// This is the clip-to-below operation: pixels of `dest` survive only where
/// `mask` is opaque.
///
pub fn mask_alpha(dest: &mut RasterSurface, mask: &RasterSurface) {
    assert!(dest.width() == mask.width() && dest.height() == mask.height(), "mask between mismatched surfaces");

    let mask_pixels = mask.pixels();
    let dest_pixels = dest.pixels_mut();

    for (dest_px, mask_px) in dest_pixels.chunks_exact_mut(4).zip(mask_pixels.chunks_exact(4)) {
        dest_px[3] = ((dest_px[3] as u32 * mask_px[3] as u32) / 255) as u8;
    }
}

///
/// Sets every pixel of a surface to one value
///
pub fn fill_all(dest: &mut RasterSurface, value: Rgba) {
    for px in dest.pixels_mut().chunks_exact_mut(4) {
        px[0] = value.r;
        px[1] = value.g;
        px[2] = value.b;
        px[3] = value.a;
    }
}
