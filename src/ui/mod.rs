/// View helpers
///
/// - Side-by-side preview of original and filtered rasters (comparison.rs)
/// - Parameter listing and download affordance (details.rs)

pub mod comparison;
pub mod details;
