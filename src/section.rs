//! I-section properties from plate dimensions

use serde::{Deserialize, Serialize};

use crate::error::{BeamError, BeamResult};

/// A built-up I-section described by its three plates
///
/// Flanges may differ, so the centroid is found first and the second moment
/// of area follows from the parallel-axis theorem. Dimensions are measured
/// top to bottom: top flange, web (clear depth between flanges), bottom
/// flange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ISection {
    /// Top flange width
    pub top_flange_width: f64,
    /// Top flange thickness
    pub top_flange_thickness: f64,
    /// Clear web depth between the flanges
    pub web_depth: f64,
    /// Web thickness
    pub web_thickness: f64,
    /// Bottom flange width
    pub bottom_flange_width: f64,
    /// Bottom flange thickness
    pub bottom_flange_thickness: f64,
}

impl ISection {
    /// Create a section from its plate dimensions
    pub fn new(
        top_flange_width: f64,
        top_flange_thickness: f64,
        web_depth: f64,
        web_thickness: f64,
        bottom_flange_width: f64,
        bottom_flange_thickness: f64,
    ) -> BeamResult<Self> {
        let section = Self {
            top_flange_width,
            top_flange_thickness,
            web_depth,
            web_thickness,
            bottom_flange_width,
            bottom_flange_thickness,
        };
        for dim in [
            top_flange_width,
            top_flange_thickness,
            web_depth,
            web_thickness,
            bottom_flange_width,
            bottom_flange_thickness,
        ] {
            if dim <= 0.0 {
                return Err(BeamError::InvalidGeometry(format!(
                    "section plate dimensions must be positive (got {dim})"
                )));
            }
        }
        Ok(section)
    }

    /// Create a doubly-symmetric wide-flange section
    ///
    /// `depth` is the overall depth including both flanges.
    pub fn symmetric(
        depth: f64,
        flange_width: f64,
        flange_thickness: f64,
        web_thickness: f64,
    ) -> BeamResult<Self> {
        Self::new(
            flange_width,
            flange_thickness,
            depth - 2.0 * flange_thickness,
            web_thickness,
            flange_width,
            flange_thickness,
        )
    }

    /// Overall depth of the section
    pub fn depth(&self) -> f64 {
        self.top_flange_thickness + self.web_depth + self.bottom_flange_thickness
    }

    /// Cross-sectional area
    pub fn area(&self) -> f64 {
        self.top_flange_width * self.top_flange_thickness
            + self.web_depth * self.web_thickness
            + self.bottom_flange_width * self.bottom_flange_thickness
    }

    /// Centroid depth measured from the top fiber
    pub fn centroid(&self) -> f64 {
        let tf = self.top_flange_width * self.top_flange_thickness;
        let web = self.web_depth * self.web_thickness;
        let bf = self.bottom_flange_width * self.bottom_flange_thickness;
        let first_moment = tf * self.top_flange_thickness / 2.0
            + web * (self.top_flange_thickness + self.web_depth / 2.0)
            + bf * (self.top_flange_thickness + self.web_depth + self.bottom_flange_thickness / 2.0);
        first_moment / self.area()
    }

    /// Second moment of area about the strong (bending) axis
    pub fn moment_of_inertia(&self) -> f64 {
        let ybar = self.centroid();
        let tf_area = self.top_flange_width * self.top_flange_thickness;
        let web_area = self.web_depth * self.web_thickness;
        let bf_area = self.bottom_flange_width * self.bottom_flange_thickness;

        let tf_center = self.top_flange_thickness / 2.0;
        let web_center = self.top_flange_thickness + self.web_depth / 2.0;
        let bf_center =
            self.top_flange_thickness + self.web_depth + self.bottom_flange_thickness / 2.0;

        self.top_flange_width * self.top_flange_thickness.powi(3) / 12.0
            + tf_area * (ybar - tf_center).powi(2)
            + self.web_thickness * self.web_depth.powi(3) / 12.0
            + web_area * (ybar - web_center).powi(2)
            + self.bottom_flange_width * self.bottom_flange_thickness.powi(3) / 12.0
            + bf_area * (ybar - bf_center).powi(2)
    }
}
