use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn ratio(&self) -> Option<f64> {
        if self.height == 0 {
            return None;
        }
        Some(self.width as f64 / self.height as f64)
    }
}

/// Accepts images whose width:height ratio sits within `tolerance` of
/// `target_ratio`. The default rule uses the literal 1.3333 rather than 4/3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatioRule {
    pub target_ratio: f64,
    pub tolerance: f64,
}

impl Default for AspectRatioRule {
    fn default() -> Self {
        Self {
            target_ratio: global_constants::TARGET_ASPECT_RATIO,
            tolerance: global_constants::ASPECT_RATIO_TOLERANCE,
        }
    }
}

impl AspectRatioRule {
    pub fn accepts(&self, dimensions: ImageDimensions) -> bool {
        match dimensions.ratio() {
            Some(ratio) => (ratio - self.target_ratio).abs() < self.tolerance,
            None => false,
        }
    }
}
