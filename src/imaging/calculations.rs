//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Uniform downscale factor that fits `original` inside `max`.
///
/// Never above 1.0: an image already inside the box keeps its size.
///
/// # Examples
/// ```
/// # use image_compressor::imaging::scale_factor;
/// assert_eq!(scale_factor((4000, 2000), (1920, 1080)), 0.48);
/// assert_eq!(scale_factor((800, 600), (1920, 1080)), 1.0);
/// ```
pub fn scale_factor(original: (u32, u32), max: (u32, u32)) -> f64 {
    let (orig_w, orig_h) = original;
    let (max_w, max_h) = max;

    let scale_w = max_w as f64 / orig_w as f64;
    let scale_h = max_h as f64 / orig_h as f64;

    scale_w.min(scale_h).min(1.0)
}

/// Output dimensions for `original` scaled down to fit inside `max`.
///
/// Both axes are multiplied by the same [`scale_factor`] and truncated.
/// Returns `None` when either original dimension is zero. A truncated
/// dimension of zero is raised to one pixel so the result is always
/// encodable; `max` bounds are at least 1 so this never breaks the fit.
///
/// # Examples
/// ```
/// # use image_compressor::imaging::fit_within;
/// assert_eq!(fit_within((4000, 2000), (1920, 1080)), Some((1920, 960)));
/// assert_eq!(fit_within((0, 600), (1920, 1080)), None);
/// ```
pub fn fit_within(original: (u32, u32), max: (u32, u32)) -> Option<(u32, u32)> {
    let (orig_w, orig_h) = original;
    if orig_w == 0 || orig_h == 0 {
        return None;
    }

    let (max_w, max_h) = max;
    if orig_w <= max_w && orig_h <= max_h {
        return Some(original);
    }

    // floor(orig * scale) evaluated on the exact ratio, so the limiting
    // axis lands on its bound instead of one pixel short.
    let (ow, oh) = (u64::from(orig_w), u64::from(orig_h));
    let (mw, mh) = (u64::from(max_w), u64::from(max_h));
    let (new_w, new_h) = if mw * oh <= mh * ow {
        (mw, oh * mw / ow)
    } else {
        (ow * mh / oh, mh)
    };

    Some(((new_w as u32).max(1), (new_h as u32).max(1)))
}
