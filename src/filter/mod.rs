/// Filter selection and processing
///
/// This module handles:
/// - The closed set of filter families and methods offered in the UI
/// - Intensity levels (always clamped into 1..=10)
/// - Mapping a selection to concrete kernel parameters (params.rs)
/// - Running the selected filter on a raster (engine.rs)

pub mod engine;
pub mod params;
pub mod primitives;

pub use engine::FilterEngine;
pub use params::{compute_parameters, ParamDescription};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Low-pass (smoothing) or high-pass (sharpening) operation
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterFamily {
    Smoothing,
    Sharpening,
}

impl FilterFamily {
    /// Every family, in the order the UI shows them
    pub const ALL: [FilterFamily; 2] = [FilterFamily::Smoothing, FilterFamily::Sharpening];

    /// Methods belonging to this family, in UI order.
    /// The first entry is the family default.
    pub fn methods(self) -> &'static [FilterMethod] {
        match self {
            FilterFamily::Smoothing => &[
                FilterMethod::Average,
                FilterMethod::Gaussian,
                FilterMethod::Median,
            ],
            FilterFamily::Sharpening => &[FilterMethod::SimpleKernel, FilterMethod::UnsharpMask],
        }
    }

    pub fn default_method(self) -> FilterMethod {
        self.methods()[0]
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterFamily::Smoothing => "Smoothing (Low-pass)",
            FilterFamily::Sharpening => "Sharpening (High-pass)",
        }
    }
}

impl fmt::Display for FilterFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A concrete filter method
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMethod {
    /// Box (mean) blur
    Average,
    /// Gaussian-weighted blur
    Gaussian,
    /// Median of the neighbourhood
    Median,
    /// Fixed 3x3 high-pass kernel blended back onto the original
    SimpleKernel,
    /// Original minus a Gaussian-blurred copy
    UnsharpMask,
}

impl FilterMethod {
    pub fn family(self) -> FilterFamily {
        match self {
            FilterMethod::Average | FilterMethod::Gaussian | FilterMethod::Median => {
                FilterFamily::Smoothing
            }
            FilterMethod::SimpleKernel | FilterMethod::UnsharpMask => FilterFamily::Sharpening,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMethod::Average => "Average blur",
            FilterMethod::Gaussian => "Gaussian blur",
            FilterMethod::Median => "Median blur",
            FilterMethod::SimpleKernel => "Simple sharpening kernel",
            FilterMethod::UnsharpMask => "Unsharp masking",
        }
    }
}

impl fmt::Display for FilterMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which transformation to run: a family plus one of its methods.
///
/// Built from a method, so the family always matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterSpec {
    family: FilterFamily,
    method: FilterMethod,
}

impl FilterSpec {
    pub fn new(method: FilterMethod) -> Self {
        Self {
            family: method.family(),
            method,
        }
    }

    pub fn family(&self) -> FilterFamily {
        self.family
    }

    pub fn method(&self) -> FilterMethod {
        self.method
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self::new(FilterFamily::Smoothing.default_method())
    }
}

/// Filter strength on a 1..=10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Clip any requested level into 1..=10. Out-of-range input is never an error.
    pub fn clamped(requested: i32) -> Self {
        Self(requested.clamp(Self::MIN as i32, Self::MAX as i32) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Odd square kernel size used by the size-based filters: 3, 5, ..., 21
    pub fn kernel_size(self) -> u32 {
        2 * self.0 as u32 + 1
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
