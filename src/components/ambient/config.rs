//! Injected configuration and simulation constants.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Externally supplied widget configuration.
///
/// Every field is optional in the JSON; a missing `particleNumber` means an
/// empty pool and missing `textures` means the texture folder is skipped.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AmbientConfig {
	/// Number of particles in the pool.
	pub particle_number: usize,
	/// Texture name to URL (or inline value). Edited through the control panel.
	pub textures: BTreeMap<String, String>,
}

impl AmbientConfig {
	/// Parse the JSON carried by the config element.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

/// Bounds and periods driving particle spawn and velocity drift.
#[derive(Clone, Debug)]
pub struct SimulationLimits {
	/// Largest velocity component reachable by perturbation.
	pub upper_limit: f64,
	/// Smallest velocity component reachable by perturbation.
	pub lower_limit: f64,
	/// Width of the random size range.
	pub upper_size: f64,
	/// Smallest particle size.
	pub lower_size: f64,
	/// Frames between chances to perturb `vx`.
	pub vx_period: u32,
	/// Frames between chances to perturb `vy`.
	pub vy_period: u32,
}

impl Default for SimulationLimits {
	fn default() -> Self {
		Self {
			upper_limit: 10.0,
			lower_limit: 1.0,
			upper_size: 10.0,
			lower_size: 4.0,
			vx_period: 11,
			vy_period: 13,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_injected_config() {
		let config = AmbientConfig::from_json(
			r#"{ "particleNumber": 40, "textures": { "spark": "img/spark.png", "dust": "img/dust.png" } }"#,
		)
		.unwrap();
		assert_eq!(config.particle_number, 40);
		assert_eq!(config.textures.len(), 2);
		assert_eq!(config.textures["spark"], "img/spark.png");
	}

	#[test]
	fn missing_fields_degrade_to_empty() {
		let config = AmbientConfig::from_json("{}").unwrap();
		assert_eq!(config, AmbientConfig::default());
		assert_eq!(config.particle_number, 0);
		assert!(config.textures.is_empty());
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(AmbientConfig::from_json("{ particleNumber: ").is_err());
	}
}
