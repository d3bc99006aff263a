/// Parameter mapping for the filter methods
///
/// Translates a (spec, intensity) selection into the numbers a filter needs
/// and a human-readable description of them. Pure functions only: the same
/// input always yields the same output.

use super::{FilterMethod, FilterSpec, Intensity};
use std::fmt;

/// 3x3 high-pass kernel used by the simple sharpening method (row-major)
pub const SHARPEN_KERNEL: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

/// Kernel as shown in the parameter listing
const SHARPEN_KERNEL_LABEL: &str = "[[0, -1, 0], [-1, 5, -1], [0, -1, 0]]";

/// Concrete numeric parameters for one filter run.
///
/// Each variant carries exactly the values its method uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterParameters {
    Average { kernel_size: u32 },
    Gaussian { kernel_size: u32, sigma: f32 },
    Median { kernel_size: u32 },
    /// output = original + high_pass * amount
    SimpleKernel { amount: f32 },
    /// output = original * (1 + amount) - blurred * amount
    UnsharpMask { kernel_size: u32, sigma: f32, amount: f32 },
}

#[cfg(test)]
impl FilterParameters {
    pub fn method(&self) -> FilterMethod {
        match self {
            FilterParameters::Average { .. } => FilterMethod::Average,
            FilterParameters::Gaussian { .. } => FilterMethod::Gaussian,
            FilterParameters::Median { .. } => FilterMethod::Median,
            FilterParameters::SimpleKernel { .. } => FilterMethod::SimpleKernel,
            FilterParameters::UnsharpMask { .. } => FilterMethod::UnsharpMask,
        }
    }

    pub fn kernel_size(&self) -> Option<u32> {
        match *self {
            FilterParameters::Average { kernel_size }
            | FilterParameters::Gaussian { kernel_size, .. }
            | FilterParameters::Median { kernel_size }
            | FilterParameters::UnsharpMask { kernel_size, .. } => Some(kernel_size),
            FilterParameters::SimpleKernel { .. } => None,
        }
    }

    pub fn sigma(&self) -> Option<f32> {
        match *self {
            FilterParameters::Gaussian { sigma, .. }
            | FilterParameters::UnsharpMask { sigma, .. } => Some(sigma),
            _ => None,
        }
    }

    pub fn amount(&self) -> Option<f32> {
        match *self {
            FilterParameters::SimpleKernel { amount }
            | FilterParameters::UnsharpMask { amount, .. } => Some(amount),
            _ => None,
        }
    }
}

/// Ordered label -> value listing of the parameters that were applied
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParamDescription {
    entries: Vec<(&'static str, String)>,
}

impl ParamDescription {
    fn push(&mut self, label: &'static str, value: impl Into<String>) {
        self.entries.push((label, value.into()));
    }

    #[cfg(test)]
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(label, _)| *label).collect()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, value)| value.as_str())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for ParamDescription {
    /// One "- label: value" line per entry
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "- {}: {}", label, value)?;
        }
        Ok(())
    }
}

fn square(size: u32) -> String {
    format!("{} x {}", size, size)
}

/// Map a filter selection and a requested intensity to kernel parameters.
///
/// The intensity is clamped into 1..=10 before anything is derived from it.
pub fn compute_parameters(
    spec: FilterSpec,
    requested: i32,
) -> (FilterParameters, ParamDescription) {
    let intensity = Intensity::clamped(requested);
    let level = intensity.get() as f32;
    let kernel_size = intensity.kernel_size();

    let mut description = ParamDescription::default();
    description.push("Filter family", spec.family().label());
    description.push("Filter used", spec.method().label());
    description.push("Intensity level", format!("{}/{}", intensity, Intensity::MAX));

    let params = match spec.method() {
        FilterMethod::Average => {
            description.push("Kernel size", square(kernel_size));
            FilterParameters::Average { kernel_size }
        }
        FilterMethod::Gaussian => {
            let sigma = level / 2.0;
            description.push("Kernel size", square(kernel_size));
            description.push("Sigma", format!("{:.2}", sigma));
            FilterParameters::Gaussian { kernel_size, sigma }
        }
        FilterMethod::Median => {
            // Median filters take no sigma
            description.push("Kernel size", square(kernel_size));
            FilterParameters::Median { kernel_size }
        }
        FilterMethod::SimpleKernel => {
            let amount = 0.2 * level; // 0.2 - 2.0
            description.push("Kernel", SHARPEN_KERNEL_LABEL);
            description.push("Amount (weight)", format!("{:.2}", amount));
            FilterParameters::SimpleKernel { amount }
        }
        FilterMethod::UnsharpMask => {
            let sigma = level / 2.0;
            let amount = level / 2.0;
            description.push("Blur kernel size", square(kernel_size));
            description.push("Sigma", format!("{:.2}", sigma));
            description.push("Amount", format!("{:.2}", amount));
            FilterParameters::UnsharpMask { kernel_size, sigma, amount }
        }
    };

    (params, description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterFamily;

    const COMMON: [&str; 3] = ["Filter family", "Filter used", "Intensity level"];

    fn expected_labels(method: FilterMethod) -> Vec<&'static str> {
        let extra: &[&str] = match method {
            FilterMethod::Average | FilterMethod::Median => &["Kernel size"],
            FilterMethod::Gaussian => &["Kernel size", "Sigma"],
            FilterMethod::SimpleKernel => &["Kernel", "Amount (weight)"],
            FilterMethod::UnsharpMask => &["Blur kernel size", "Sigma", "Amount"],
        };
        COMMON.iter().chain(extra).copied().collect()
    }

    #[test]
    fn test_description_fields_per_method() {
        for family in FilterFamily::ALL {
            for &method in family.methods() {
                for level in 1..=10 {
                    let (_, description) = compute_parameters(FilterSpec::new(method), level);
                    assert_eq!(description.labels(), expected_labels(method), "{:?}", method);
                }
            }
        }
    }

    #[test]
    fn test_average_at_five() {
        let (params, description) = compute_parameters(FilterSpec::new(FilterMethod::Average), 5);
        assert_eq!(params, FilterParameters::Average { kernel_size: 11 });
        assert_eq!(description.get("Kernel size"), Some("11 x 11"));
        assert_eq!(description.get("Intensity level"), Some("5/10"));
        assert_eq!(description.get("Filter family"), Some("Smoothing (Low-pass)"));
        assert_eq!(description.get("Filter used"), Some("Average blur"));
    }

    #[test]
    fn test_unsharp_at_ten() {
        let (params, description) =
            compute_parameters(FilterSpec::new(FilterMethod::UnsharpMask), 10);
        assert_eq!(params.kernel_size(), Some(21));
        assert_eq!(params.sigma(), Some(5.0));
        assert_eq!(params.amount(), Some(5.0));
        assert_eq!(description.get("Blur kernel size"), Some("21 x 21"));
        assert_eq!(description.get("Sigma"), Some("5.00"));
        assert_eq!(description.get("Amount"), Some("5.00"));
    }

    #[test]
    fn test_gaussian_sigma_is_half_intensity() {
        let (params, description) = compute_parameters(FilterSpec::new(FilterMethod::Gaussian), 3);
        assert_eq!(params, FilterParameters::Gaussian { kernel_size: 7, sigma: 1.5 });
        assert_eq!(description.get("Sigma"), Some("1.50"));
    }

    #[test]
    fn test_median_has_no_sigma() {
        let (params, description) = compute_parameters(FilterSpec::new(FilterMethod::Median), 4);
        assert_eq!(params.sigma(), None);
        assert_eq!(params.kernel_size(), Some(9));
        assert_eq!(description.get("Sigma"), None);
    }

    #[test]
    fn test_simple_kernel_amount_range() {
        let spec = FilterSpec::new(FilterMethod::SimpleKernel);
        let (low, low_desc) = compute_parameters(spec, 1);
        let (high, high_desc) = compute_parameters(spec, 10);
        assert!((low.amount().unwrap() - 0.2).abs() < 1e-6);
        assert!((high.amount().unwrap() - 2.0).abs() < 1e-6);
        assert_eq!(low_desc.get("Amount (weight)"), Some("0.20"));
        assert_eq!(high_desc.get("Amount (weight)"), Some("2.00"));
        assert_eq!(high.kernel_size(), None);
        assert_eq!(high_desc.get("Kernel"), Some("[[0, -1, 0], [-1, 5, -1], [0, -1, 0]]"));
    }

    #[test]
    fn test_out_of_range_intensity_is_clamped() {
        let spec = FilterSpec::new(FilterMethod::Average);
        let (high, high_desc) = compute_parameters(spec, 15);
        let (low, low_desc) = compute_parameters(spec, 0);
        assert_eq!(high.kernel_size(), Some(21));
        assert_eq!(high_desc.get("Intensity level"), Some("10/10"));
        assert_eq!(low.kernel_size(), Some(3));
        assert_eq!(low_desc.get("Intensity level"), Some("1/10"));
    }

    #[test]
    fn test_parameters_are_non_negative() {
        for family in FilterFamily::ALL {
            for &method in family.methods() {
                for level in -3..=13 {
                    let (params, _) = compute_parameters(FilterSpec::new(method), level);
                    assert!(params.sigma().unwrap_or(0.0) >= 0.0);
                    assert!(params.amount().unwrap_or(0.0) >= 0.0);
                    if let Some(size) = params.kernel_size() {
                        assert!(size >= 3 && size % 2 == 1);
                    }
                    assert_eq!(params.method(), method);
                }
            }
        }
    }

    #[test]
    fn test_mapping_is_pure() {
        let spec = FilterSpec::new(FilterMethod::Gaussian);
        assert_eq!(compute_parameters(spec, 6), compute_parameters(spec, 6));
    }

    #[test]
    fn test_listing_format() {
        let (_, description) = compute_parameters(FilterSpec::new(FilterMethod::Median), 2);
        assert_eq!(
            description.to_string(),
            "- Filter family: Smoothing (Low-pass)\n\
             - Filter used: Median blur\n\
             - Intensity level: 2/10\n\
             - Kernel size: 5 x 5"
        );
    }
}
