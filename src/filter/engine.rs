/// Filter engine
///
/// Picks the primitive(s) for a method and feeds them the mapped parameters.

use super::params::{FilterParameters, SHARPEN_KERNEL};
use super::primitives::{ImageprocPrimitives, Primitives};
use crate::state::data::Raster;

#[derive(Debug, Clone, Default)]
pub struct FilterEngine<P = ImageprocPrimitives> {
    primitives: P,
}

#[cfg(test)]
impl FilterEngine<ImageprocPrimitives> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Primitives> FilterEngine<P> {
    /// Use a different primitive backend
    #[cfg(test)]
    pub fn with_primitives(primitives: P) -> Self {
        Self { primitives }
    }

    /// Run a filter. The output has the input's width, height and channels.
    pub fn apply(&self, raster: &Raster, params: &FilterParameters) -> Raster {
        let p = &self.primitives;

        match *params {
            FilterParameters::Average { kernel_size } => p.box_filter(raster, kernel_size),
            FilterParameters::Gaussian { kernel_size, sigma } => {
                p.gaussian_filter(raster, kernel_size, sigma)
            }
            FilterParameters::Median { kernel_size } => p.median_filter(raster, kernel_size),
            FilterParameters::SimpleKernel { amount } => {
                // Un-normalized: original + high_pass * amount
                let high_pass = p.convolve(raster, &SHARPEN_KERNEL, 3, 3);
                p.saturated_blend(raster, 1.0, &high_pass, amount)
            }
            FilterParameters::UnsharpMask { kernel_size, sigma, amount } => {
                let blurred = p.gaussian_filter(raster, kernel_size, sigma);
                p.saturated_blend(raster, 1.0 + amount, &blurred, -amount)
            }
        }
    }
}
