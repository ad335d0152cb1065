//! Presentation settings
//!
//! Affects only how a frame is drawn, never the simulation. Read once at
//! startup from the page query string (`?quality=low&fps=1`).

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Shadow blur around projectiles (0 disables the glow pass)
    pub fn glow_blur(&self) -> f32 {
        match self {
            QualityPreset::Low => 0.0,
            QualityPreset::Medium => 10.0,
            QualityPreset::High => 16.0,
        }
    }

    /// Whether particles fade with their remaining life
    pub fn particle_fade(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Glow around projectiles
    pub glow: bool,
    /// Particle bursts (hidden when off; still simulated)
    pub particles: bool,

    // === HUD ===
    /// Show the charge power bar
    pub show_power_bar: bool,
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (no glow, no fading sparks)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            glow: true,
            particles: true,
            show_power_bar: true,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset (applies preset defaults)
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;
        if preset == QualityPreset::Low {
            self.glow = false;
        }
    }

    /// Effective glow blur radius (0 = no glow)
    pub fn effective_glow(&self) -> f32 {
        if self.glow && !self.reduced_motion {
            self.quality.glow_blur()
        } else {
            0.0
        }
    }

    /// Effective particle fading (respects reduced_motion)
    pub fn effective_particle_fade(&self) -> bool {
        self.quality.particle_fade() && !self.reduced_motion
    }

    /// Parse a URL query string, ignoring unknown keys and bad values
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        let query = query.trim_start_matches('?');

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, "1"));
            let flag = matches!(value, "1" | "true" | "on" | "yes");
            match key {
                "quality" => match QualityPreset::parse(value) {
                    Some(preset) => settings.apply_preset(preset),
                    None => log::warn!("Unknown quality preset: {}", value),
                },
                "glow" => settings.glow = flag,
                "particles" => settings.particles = flag,
                "power_bar" => settings.show_power_bar = flag,
                "fps" => settings.show_fps = flag,
                "reduced_motion" => settings.reduced_motion = flag,
                _ => log::debug!("Ignoring query key: {}", key),
            }
        }

        settings
    }
}
