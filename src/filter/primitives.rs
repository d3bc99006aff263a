/// Blur / convolution primitives
///
/// The filter engine only talks to the `Primitives` trait; the default
/// implementation delegates to `imageproc`. Every primitive returns a new
/// raster with the same width, height and channel count as its input.

use image::{Luma, Rgb, RgbImage};
use imageproc::definitions::{Clamp, Image};
use imageproc::filter::{box_filter, median_filter, separable_filter_equal, Kernel};
use imageproc::map::{blue_channel, green_channel, map_colors, map_colors2, red_channel};

use crate::state::data::Raster;

/// Capability interface over a blur / convolution library
pub trait Primitives {
    /// Mean over a `kernel_size` x `kernel_size` neighbourhood
    fn box_filter(&self, raster: &Raster, kernel_size: u32) -> Raster;

    /// Gaussian blur with an explicit kernel size and standard deviation
    fn gaussian_filter(&self, raster: &Raster, kernel_size: u32, sigma: f32) -> Raster;

    /// Per-channel median over a `kernel_size` x `kernel_size` neighbourhood
    fn median_filter(&self, raster: &Raster, kernel_size: u32) -> Raster;

    /// 2D convolution with a row-major `width` x `height` kernel, saturated to u8
    fn convolve(&self, raster: &Raster, kernel: &[f32], width: u32, height: u32) -> Raster;

    /// `a * alpha + b * beta` per channel, rounded and clipped to 0..=255
    fn saturated_blend(&self, a: &Raster, alpha: f32, b: &Raster, beta: f32) -> Raster;
}

/// `imageproc`-backed primitives
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageprocPrimitives;

/// Neighbourhood radius for an odd kernel size
fn radius(kernel_size: u32) -> u32 {
    kernel_size.saturating_sub(1) / 2
}

/// Normalized 1D Gaussian kernel with exactly `size` taps
pub fn gaussian_kernel(size: u32, sigma: f32) -> Vec<f32> {
    let size = size.max(1);
    // Same fallback sigma OpenCV derives from the kernel size
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
    };
    let center = (size as f32 - 1.0) / 2.0;
    let two_sigma_sq = 2.0 * sigma * sigma;

    let mut weights: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - center;
            (-(d * d) / two_sigma_sq).exp()
        })
        .collect();

    let sum: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= sum;
    }
    weights
}

fn round_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn merge_channels(r: &Image<Luma<u8>>, g: &Image<Luma<u8>>, b: &Image<Luma<u8>>) -> RgbImage {
    RgbImage::from_fn(r.width(), r.height(), |x, y| {
        Rgb([
            r.get_pixel(x, y)[0],
            g.get_pixel(x, y)[0],
            b.get_pixel(x, y)[0],
        ])
    })
}

impl Primitives for ImageprocPrimitives {
    fn box_filter(&self, raster: &Raster, kernel_size: u32) -> Raster {
        // imageproc's box filter is grayscale only
        let r = radius(kernel_size);
        let red = box_filter(&red_channel(raster), r, r);
        let green = box_filter(&green_channel(raster), r, r);
        let blue = box_filter(&blue_channel(raster), r, r);
        merge_channels(&red, &green, &blue)
    }

    fn gaussian_filter(&self, raster: &Raster, kernel_size: u32, sigma: f32) -> Raster {
        // Both passes run in f32 and round once; a u8 intermediate truncates twice
        let kernel = gaussian_kernel(kernel_size, sigma);
        let wide: Image<Rgb<f32>> =
            map_colors(raster, |p: Rgb<u8>| Rgb([p[0] as f32, p[1] as f32, p[2] as f32]));
        let blurred: Image<Rgb<f32>> = separable_filter_equal(&wide, &kernel);
        map_colors(&blurred, |p: Rgb<f32>| Rgb([round_u8(p[0]), round_u8(p[1]), round_u8(p[2])]))
    }

    fn median_filter(&self, raster: &Raster, kernel_size: u32) -> Raster {
        let r = radius(kernel_size);
        median_filter(raster, r, r)
    }

    fn convolve(&self, raster: &Raster, kernel: &[f32], width: u32, height: u32) -> Raster {
        Kernel::new(kernel, width, height)
            .filter(raster, |c: &mut u8, a: f32| *c = <u8 as Clamp<f32>>::clamp(a))
    }

    fn saturated_blend(&self, a: &Raster, alpha: f32, b: &Raster, beta: f32) -> Raster {
        map_colors2(a, b, |p: Rgb<u8>, q: Rgb<u8>| {
            let mix = |c: usize| round_u8(p[c] as f32 * alpha + q[c] as f32 * beta);
            Rgb([mix(0), mix(1), mix(2)])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::params::SHARPEN_KERNEL;

    fn constant(width: u32, height: u32, value: u8) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([value, value, value]))
    }

    /// Black image with a single bright pixel in the middle
    fn impulse(size: u32) -> RgbImage {
        let mut img = constant(size, size, 0);
        img.put_pixel(size / 2, size / 2, Rgb([255, 255, 255]));
        img
    }

    fn close(a: u8, b: u8) -> bool {
        (a as i16 - b as i16).abs() <= 1
    }

    fn is_constant(img: &RgbImage, value: u8) -> bool {
        img.pixels().all(|px| px.0 == [value; 3])
    }

    #[test]
    fn test_gaussian_kernel_is_normalized_and_symmetric() {
        for size in [3, 5, 11, 21] {
            let kernel = gaussian_kernel(size, size as f32 / 4.0);
            assert_eq!(kernel.len(), size as usize);
            let sum: f32 = kernel.iter().sum();
            assert!((sum - 1.0).abs() < 1e-4);
            for i in 0..kernel.len() / 2 {
                assert!((kernel[i] - kernel[kernel.len() - 1 - i]).abs() < 1e-6);
            }
            let center = kernel.len() / 2;
            assert!(kernel.iter().all(|&w| w <= kernel[center]));
        }
    }

    #[test]
    fn test_gaussian_kernel_zero_sigma_falls_back() {
        let kernel = gaussian_kernel(5, 0.0);
        assert!(kernel.iter().all(|w| w.is_finite() && *w > 0.0));
    }

    #[test]
    fn test_primitives_preserve_dimensions() {
        let img = impulse(9);
        let p = ImageprocPrimitives;
        let outputs = [
            p.box_filter(&img, 5),
            p.gaussian_filter(&img, 5, 1.0),
            p.median_filter(&img, 3),
            p.convolve(&img, &SHARPEN_KERNEL, 3, 3),
            p.saturated_blend(&img, 1.0, &img, 0.5),
        ];
        for out in outputs {
            assert_eq!(out.dimensions(), img.dimensions());
        }
    }

    #[test]
    fn test_blurs_keep_constant_image() {
        let p = ImageprocPrimitives;
        for value in [0, 2, 11, 100, 254, 255] {
            let img = constant(12, 8, value);
            for size in [3, 7, 21] {
                let sigma = (size / 2) as f32 / 2.0;
                let label = format!("value {} size {}", value, size);
                assert!(is_constant(&p.box_filter(&img, size), value), "box {}", label);
                let gaussian = p.gaussian_filter(&img, size, sigma);
                assert!(is_constant(&gaussian, value), "gaussian {}", label);
                assert!(is_constant(&p.median_filter(&img, size), value), "median {}", label);
            }
        }
    }

    #[test]
    fn test_gaussian_rounds_instead_of_truncating() {
        // Step edge: the blurred values stay symmetric around the midpoint
        let img =
            RgbImage::from_fn(10, 3, |x, _| if x < 5 { Rgb([0; 3]) } else { Rgb([200; 3]) });
        let out = ImageprocPrimitives.gaussian_filter(&img, 5, 1.0);
        let left = out.get_pixel(4, 1)[0] as i16;
        let right = out.get_pixel(5, 1)[0] as i16;
        assert!((left + right - 200).abs() <= 1);
        let flat = ImageprocPrimitives.gaussian_filter(&constant(4, 4, 100), 3, 0.5);
        assert!(is_constant(&flat, 100));
    }

    #[test]
    fn test_box_filter_spreads_impulse() {
        let img = impulse(9);
        let out = ImageprocPrimitives.box_filter(&img, 3);
        // 255 / 9 spread over the 3x3 neighbourhood
        assert!(close(out.get_pixel(4, 4)[0], 28));
        assert!(close(out.get_pixel(3, 3)[0], 28));
        assert_eq!(out.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_median_removes_impulse() {
        let out = ImageprocPrimitives.median_filter(&impulse(9), 3);
        assert!(out.pixels().all(|px| px.0 == [0, 0, 0]));
    }

    #[test]
    fn test_sharpen_kernel_keeps_constant_image() {
        let img = constant(6, 6, 80);
        let out = ImageprocPrimitives.convolve(&img, &SHARPEN_KERNEL, 3, 3);
        assert!(out.pixels().all(|px| px.0 == [80, 80, 80]));
    }

    #[test]
    fn test_convolve_saturates_instead_of_wrapping() {
        let out = ImageprocPrimitives.convolve(&impulse(5), &SHARPEN_KERNEL, 3, 3);
        // 5 * 255 clips to 255, neighbours -255 clip to 0
        assert_eq!(out.get_pixel(2, 2)[0], 255);
        assert_eq!(out.get_pixel(2, 1)[0], 0);
    }

    #[test]
    fn test_saturated_blend_clips() {
        let a = constant(2, 2, 200);
        let b = constant(2, 2, 100);
        let p = ImageprocPrimitives;
        assert!(p.saturated_blend(&a, 1.0, &b, 2.0).pixels().all(|px| px.0 == [255; 3]));
        assert!(p.saturated_blend(&b, 1.0, &a, -1.0).pixels().all(|px| px.0 == [0; 3]));
        assert!(p.saturated_blend(&a, 0.5, &b, 0.5).pixels().all(|px| px.0 == [150; 3]));
    }
}
