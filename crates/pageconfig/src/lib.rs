//! Page configuration and content model.
//!
//! Everything the landing window shows that is not code lives here: hero copy,
//! the feature grid, footer columns, the demo-video source, plus the handful
//! of presentation tunables (shader variant name, gate timings, cover color,
//! pixel-ratio cap). The built-in [`Default`] reproduces the shipped page
//! verbatim; a `page.toml` can override any section.
//!
//! Durations accept either bare seconds or humantime strings (`"200ms"`).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub page: PageMeta,
    pub nav: NavSection,
    pub hero: HeroSection,
    pub gate: GateSection,
    pub media: MediaSection,
    pub features: FeaturesSection,
    pub footer: FooterSection,
}

impl PageConfig {
    /// Parses a TOML document, falling back to defaults section by section.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.hero.variant.trim().is_empty() {
            return Err(ConfigError::Invalid("hero.variant must not be empty".into()));
        }
        if self.hero.pixel_ratio_cap <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "hero.pixel_ratio_cap must be positive, got {}",
                self.hero.pixel_ratio_cap
            )));
        }
        // Confirms the color parses; the renderer asks again later.
        self.gate.cover_rgb()?;
        if self.media.source.trim().is_empty() {
            return Err(ConfigError::Invalid("media.source must not be empty".into()));
        }
        Ok(())
    }
}

/// Window title and description metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Bona - AI Hiring Assistant for Customer Service".into(),
            description: "Automate your customer service hiring process with Bona. \
                          AI-powered candidate screening, interviews, and matching."
                .into(),
        }
    }
}

/// Top navigation labels. Static; rendered by `heroshade content`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NavSection {
    pub links: Vec<String>,
    pub cta: String,
}

impl Default for NavSection {
    fn default() -> Self {
        Self {
            links: vec!["Features".into(), "Pricing".into(), "About".into()],
            cta: "Get Started".into(),
        }
    }
}

/// Hero copy plus the background tunables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeroSection {
    /// Background shader variant name; resolved against the preset catalog.
    pub variant: String,
    /// Device-pixel-ratio contribution cap for the background surface.
    pub pixel_ratio_cap: f64,
    pub headline: String,
    pub tagline: String,
    pub ctas: Vec<String>,
}

impl Default for HeroSection {
    fn default() -> Self {
        Self {
            variant: "liquid-mesh".into(),
            pixel_ratio_cap: 2.0,
            headline: "Leave it to Bona".into(),
            tagline: "Bona is your AI hiring assistant that streamlines recruitment, \
                      screens candidates, and helps you find the perfect customer \
                      service agents—all in one intelligent platform."
                .into(),
            ctas: vec!["Start Free Trial".into(), "Watch Demo".into()],
        }
    }
}

/// Loading-cover behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GateSection {
    /// Dwell on the cover after loading completes.
    #[serde(deserialize_with = "deserialize_duration")]
    pub hold: Duration,
    /// Fade-out length.
    #[serde(deserialize_with = "deserialize_duration")]
    pub fade: Duration,
    /// Cover fill as a `#rrggbb` (or `#rgb`) hex string.
    pub cover_color: String,
}

impl Default for GateSection {
    fn default() -> Self {
        Self {
            hold: Duration::from_millis(1000),
            fade: Duration::from_millis(200),
            cover_color: "#009869".into(),
        }
    }
}

impl GateSection {
    /// Cover color as normalized RGB.
    pub fn cover_rgb(&self) -> Result<[f32; 3], ConfigError> {
        parse_hex_rgb(&self.cover_color)
    }
}

/// Demo-video panel content.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MediaSection {
    /// Media URL; displayed and handed to the playback sink, never fetched.
    pub source: String,
    /// Poster image path, relative to the config file or absolute.
    pub poster: Option<PathBuf>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Length the stub playback clock runs before reporting the end.
    #[serde(deserialize_with = "deserialize_duration")]
    pub duration: Duration,
}

impl Default for MediaSection {
    fn default() -> Self {
        Self {
            source: "https://www.w3schools.com/html/mov_bbb.mp4".into(),
            poster: Some(PathBuf::from("thumbnail.png")),
            title: None,
            description: None,
            duration: Duration::from_secs(10),
        }
    }
}

/// Feature grid: section header plus one card per capability.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeaturesSection {
    pub kicker: String,
    pub heading: String,
    pub intro: String,
    pub cards: Vec<FeatureCard>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
}

impl Default for FeaturesSection {
    fn default() -> Self {
        let card = |title: &str, description: &str| FeatureCard {
            title: title.into(),
            description: description.into(),
        };
        Self {
            kicker: "Features".into(),
            heading: "Everything You Need to Hire Faster".into(),
            intro: "Powerful AI tools designed specifically for customer service \
                    recruitment — from screening to onboarding."
                .into(),
            cards: vec![
                card(
                    "Role Assessment",
                    "Assess candidate skills and fit for specific roles using AI-driven insights.",
                ),
                card(
                    "Candidate Scoring & Ranking",
                    "AI-driven scoring and ranking to surface the best fits for your team instantly.",
                ),
                card(
                    "Pre-Screening Filters",
                    "Customizable question filters that automatically qualify or disqualify candidates.",
                ),
                card(
                    "Basic Reporting",
                    "Gain insights into your hiring pipeline with clear, actionable reports.",
                ),
                card(
                    "Automated Voice Interview",
                    "Conduct AI-powered voice interviews to assess communication skills around the clock.",
                ),
                card(
                    "Candidate Dashboard",
                    "A personalized dashboard for candidates to track status and receive feedback.",
                ),
            ],
        }
    }
}

/// Footer tagline and link columns.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FooterSection {
    pub tagline: String,
    pub columns: Vec<FooterColumn>,
    pub notice: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<String>,
}

impl Default for FooterSection {
    fn default() -> Self {
        let column = |title: &str, links: &[&str]| FooterColumn {
            title: title.into(),
            links: links.iter().map(|link| link.to_string()).collect(),
        };
        Self {
            tagline: "AI-powered hiring assistant for customer service teams.".into(),
            columns: vec![
                column("Product", &["Features", "Pricing", "Integrations"]),
                column("Company", &["About", "Blog", "Careers"]),
                column("Support", &["Documentation", "Contact", "Privacy"]),
            ],
            notice: "© 2026 Bona. All rights reserved.".into(),
        }
    }
}

/// Parses `#rgb` / `#rrggbb` into normalized RGB components.
pub fn parse_hex_rgb(input: &str) -> Result<[f32; 3], ConfigError> {
    let hex = input.trim().strip_prefix('#').ok_or_else(|| {
        ConfigError::Invalid(format!("color '{input}' must start with '#'"))
    })?;
    if !hex.is_ascii() {
        return Err(ConfigError::Invalid(format!("invalid hex color '{input}'")));
    }

    let expand = |nibble: u8| nibble << 4 | nibble;
    let bytes = match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, ch) in out.iter_mut().zip(hex.chars()) {
                let nibble = ch
                    .to_digit(16)
                    .ok_or_else(|| ConfigError::Invalid(format!("invalid hex color '{input}'")))?;
                *slot = expand(nibble as u8);
            }
            out
        }
        6 => {
            let mut out = [0u8; 3];
            for (index, slot) in out.iter_mut().enumerate() {
                let pair = &hex[index * 2..index * 2 + 2];
                *slot = u8::from_str_radix(pair, 16).map_err(|_| {
                    ConfigError::Invalid(format!("invalid hex color '{input}'"))
                })?;
            }
            out
        }
        other => {
            return Err(ConfigError::Invalid(format!(
                "color '{input}' has {other} hex digits; expected 3 or 6"
            )))
        }
    };

    Ok([
        bytes[0] as f32 / 255.0,
        bytes[1] as f32 / 255.0,
        bytes[2] as f32 / 255.0,
    ])
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    struct Visitor;
    impl<'de> de::Visitor<'de> for Visitor {
        type Value = Duration;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a duration as seconds or a human-readable string")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            humantime::parse_duration(v)
                .map_err(|err| E::custom(format!("invalid duration '{v}': {err}")))
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Duration::from_secs(v))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v < 0 {
                return Err(E::custom("duration must be non-negative"));
            }
            Ok(Duration::from_secs(v as u64))
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if v.is_nan() || v.is_sign_negative() {
                return Err(E::custom("duration must be non-negative"));
            }
            Ok(Duration::from_secs_f64(v))
        }
    }

    deserializer.deserialize_any(Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r##"
[hero]
variant = "plasma"
headline = "Hire with confidence"
pixel_ratio_cap = 1.5

[gate]
hold = "750ms"
fade = "150ms"
cover_color = "#0b9"

[media]
source = "https://cdn.example.com/demo.mp4"
poster = "assets/demo.png"
title = "Product tour"
duration = "12s"

[[features.cards]]
title = "One"
description = "First card."

[[features.cards]]
title = "Two"
description = "Second card."
"##;

    #[test]
    fn parses_sample_config() {
        let config = PageConfig::from_toml_str(SAMPLE).expect("sample parses");
        assert_eq!(config.hero.variant, "plasma");
        assert_eq!(config.hero.headline, "Hire with confidence");
        assert_eq!(config.hero.pixel_ratio_cap, 1.5);
        assert_eq!(config.gate.hold, Duration::from_millis(750));
        assert_eq!(config.gate.fade, Duration::from_millis(150));
        assert_eq!(config.media.duration, Duration::from_secs(12));
        assert_eq!(config.media.title.as_deref(), Some("Product tour"));
        assert_eq!(config.features.cards.len(), 2);
        // Untouched sections keep their defaults.
        assert_eq!(config.nav.cta, "Get Started");
        assert_eq!(config.footer.columns.len(), 3);
    }

    #[test]
    fn defaults_carry_the_shipped_page_content() {
        let config = PageConfig::default();
        assert_eq!(config.hero.headline, "Leave it to Bona");
        assert_eq!(config.hero.variant, "liquid-mesh");
        assert_eq!(config.features.cards.len(), 6);
        assert_eq!(config.gate.cover_color, "#009869");
        assert_eq!(config.gate.hold, Duration::from_millis(1000));
        assert_eq!(config.gate.fade, Duration::from_millis(200));
        config.validate().expect("defaults validate");
    }

    #[test]
    fn durations_accept_bare_seconds() {
        let config = PageConfig::from_toml_str("[gate]\nhold = 2\n").unwrap();
        assert_eq!(config.gate.hold, Duration::from_secs(2));
    }

    #[test]
    fn bad_duration_is_a_parse_error() {
        let err = PageConfig::from_toml_str("[gate]\nhold = \"soon\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn empty_media_source_is_rejected() {
        let err = PageConfig::from_toml_str("[media]\nsource = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_pixel_ratio_cap_is_rejected() {
        let err = PageConfig::from_toml_str("[hero]\npixel_ratio_cap = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn hex_colors_parse_in_both_widths() {
        assert_eq!(parse_hex_rgb("#ffffff").unwrap(), [1.0, 1.0, 1.0]);
        assert_eq!(parse_hex_rgb("#000").unwrap(), [0.0, 0.0, 0.0]);

        let [r, g, b] = parse_hex_rgb("#009869").unwrap();
        assert!(r.abs() < f32::EPSILON);
        assert!((g - 152.0 / 255.0).abs() < 1e-6);
        assert!((b - 105.0 / 255.0).abs() < 1e-6);

        assert!(parse_hex_rgb("009869").is_err());
        assert!(parse_hex_rgb("#00ZZ69").is_err());
        assert!(parse_hex_rgb("#0098").is_err());
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[hero]\nvariant = \"aurora\"\n").expect("write");
        let config = PageConfig::load(file.path()).expect("load");
        assert_eq!(config.hero.variant, "aurora");
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = PageConfig::load(Path::new("/nonexistent/page.toml")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("/nonexistent/page.toml"), "{message}");
    }
}
