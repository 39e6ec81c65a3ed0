//! Catalog of the built-in hero background shaders.
//!
//! Every background style the hero can render is a fixed fragment program
//! parameterised only by elapsed time and surface resolution. The catalog maps
//! a [`ShaderVariant`] key to its immutable GLSL source so variant selection
//! stays in one place; adding a style means adding an enum arm and a source
//! constant here, nothing else.
//!
//! The sources are written against the ShaderToy-style entry point
//! `void mainImage(out vec4 fragColor, in vec2 fragCoord)` and rely on the
//! `iTime`/`iResolution` aliases injected by the renderer's GLSL prelude.

mod sources;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A named, fixed fragment program producing one hero background style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderVariant {
    /// Drifting soft-radial color blobs over a dark ground.
    LiquidMesh,
    /// Horizontal light bands flowing like northern lights.
    Aurora,
    /// Iridescent sine-interference plasma in the brand green.
    Plasma,
}

/// Raised when a variant name does not match the catalog.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown shader variant '{0}'; expected one of liquid-mesh, aurora, plasma")]
pub struct UnknownVariant(pub String);

impl ShaderVariant {
    /// Every catalog entry, in presentation order.
    pub const fn all() -> [ShaderVariant; 3] {
        [
            ShaderVariant::LiquidMesh,
            ShaderVariant::Aurora,
            ShaderVariant::Plasma,
        ]
    }

    /// Stable kebab-case name used by config files and the CLI.
    pub const fn name(self) -> &'static str {
        match self {
            ShaderVariant::LiquidMesh => "liquid-mesh",
            ShaderVariant::Aurora => "aurora",
            ShaderVariant::Plasma => "plasma",
        }
    }

    /// One-line description for `heroshade variants`.
    pub const fn summary(self) -> &'static str {
        match self {
            ShaderVariant::LiquidMesh => "smooth color blobs that drift and morph",
            ShaderVariant::Aurora => "flowing horizontal light bands",
            ShaderVariant::Plasma => "sine-interference plasma, brand palette",
        }
    }

    /// GLSL fragment body implementing `mainImage` for this variant.
    pub const fn fragment_body(self) -> &'static str {
        match self {
            ShaderVariant::LiquidMesh => sources::LIQUID_MESH,
            ShaderVariant::Aurora => sources::AURORA,
            ShaderVariant::Plasma => sources::PLASMA,
        }
    }
}

impl Default for ShaderVariant {
    fn default() -> Self {
        ShaderVariant::LiquidMesh
    }
}

impl fmt::Display for ShaderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShaderVariant {
    type Err = UnknownVariant;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "liquid-mesh" | "liquid_mesh" | "liquidmesh" => Ok(ShaderVariant::LiquidMesh),
            "aurora" => Ok(ShaderVariant::Aurora),
            "plasma" => Ok(ShaderVariant::Plasma),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for variant in ShaderVariant::all() {
            assert_eq!(variant.name().parse::<ShaderVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn parsing_is_case_and_separator_tolerant() {
        assert_eq!(
            "Liquid_Mesh".parse::<ShaderVariant>().unwrap(),
            ShaderVariant::LiquidMesh
        );
        assert_eq!(
            "  AURORA ".parse::<ShaderVariant>().unwrap(),
            ShaderVariant::Aurora
        );
    }

    #[test]
    fn unknown_names_are_rejected_with_the_offending_input() {
        let err = "vaporwave".parse::<ShaderVariant>().unwrap_err();
        assert_eq!(err, UnknownVariant("vaporwave".into()));
        assert!(err.to_string().contains("vaporwave"));
    }

    #[test]
    fn every_source_defines_main_image_and_no_entry_point() {
        for variant in ShaderVariant::all() {
            let body = variant.fragment_body();
            assert!(body.contains("void mainImage"), "{variant} lacks mainImage");
            // The prelude owns main(); catalog sources must not define it.
            assert!(!body.contains("void main("), "{variant} defines main()");
            assert!(!body.contains("#version"), "{variant} carries a #version");
        }
    }

    #[test]
    fn summaries_are_present_for_listings() {
        for variant in ShaderVariant::all() {
            assert!(!variant.summary().is_empty());
        }
    }
}
