//! Latitude/longitude mapping for the location widget.
//!
//! Two stateless projections of a validated geographic point: a percentage
//! offset on a flat equirectangular overlay, and a position on a sphere for
//! the 3D marker. Both are exact given the stated formulas, so rendered
//! positions are reproducible bit for bit.

use crate::error::InvalidCoordinate;

/// Radius used for the 3D marker projection; slightly above a unit sphere so
/// the marker sits on top of the surface.
pub const MARKER_RADIUS: f64 = 1.02;

/// A validated geographic position in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Build a point from degrees. Non-finite or out-of-range values fail
    /// with [`InvalidCoordinate`] instead of producing NaN marker positions.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate::new("latitude", lat.to_string()));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate::new("longitude", lng.to_string()));
        }
        Ok(Self { lat, lng })
    }

    /// Parse the string lat/lng pair carried by the wire format.
    pub fn parse(lat: &str, lng: &str) -> Result<Self, InvalidCoordinate> {
        let lat_deg: f64 = lat
            .trim()
            .parse()
            .map_err(|_| InvalidCoordinate::new("latitude", lat))?;
        let lng_deg: f64 = lng
            .trim()
            .parse()
            .map_err(|_| InvalidCoordinate::new("longitude", lng))?;
        Self::new(lat_deg, lng_deg)
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Percentage offset from the center of a flat equirectangular overlay:
    /// lng 180° maps to x = 100, lat 90° maps to y = -100.
    pub fn overlay_offset(&self) -> (f64, f64) {
        ((self.lng / 180.0) * 100.0, (-self.lat / 90.0) * 100.0)
    }

    /// Position on a sphere of the given radius, y axis up: the north pole
    /// maps to `(0, radius, 0)`.
    pub fn sphere_position(&self, radius: f64) -> [f64; 3] {
        let phi = (90.0 - self.lat).to_radians();
        let theta = (self.lng + 180.0).to_radians();
        [
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        ]
    }
}
