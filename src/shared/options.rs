//! Zentrale Konfiguration für Corner-Cutting Curves.
//!
//! `CurveOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{
    CurvePalette, SegmentJoin, CURVE_COLOR_DEFAULT, MARKER_COLOR_DEFAULT, POINT_COLOR_DEFAULT,
};
use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Fenstertitel.
pub const WINDOW_TITLE: &str = "Curves";
/// Standard-Fenstergröße in Pixeln [Breite, Höhe].
pub const WINDOW_SIZE: [f32; 2] = [1024.0, 600.0];
/// Hintergrundfarbe (RGBA: Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Darstellung ─────────────────────────────────────────────────────

/// Farbe der Tangenten-Griffe (RGBA: Grau wie die Kontrollpunkte).
pub const HANDLE_COLOR: [f32; 4] = POINT_COLOR_DEFAULT;
/// Anzahl der Marker um den Cursor, die gezeichnet werden (0 = alle).
pub const MARKER_WINDOW: usize = 3;

/// Dateiname der Optionen-Datei neben der Binary.
pub const OPTIONS_FILE_NAME: &str = "corner_cutting_curves.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `corner_cutting_curves.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveOptions {
    // ── Fenster ─────────────────────────────────────────────────
    /// Innere Fenstergröße beim Start [Breite, Höhe]
    #[serde(default = "default_window_size")]
    pub window_size: [f32; 2],
    /// Hintergrundfarbe des Viewports
    #[serde(default = "default_background_color")]
    pub background_color: [f32; 4],

    // ── Farben ──────────────────────────────────────────────────
    /// Farbe der Kontrollpunkte
    #[serde(default = "default_point_color")]
    pub point_color: [f32; 4],
    /// Farbe der tessellierten Kurve
    #[serde(default = "default_curve_color")]
    pub curve_color: [f32; 4],
    /// Farbe der Punkt-Marker
    #[serde(default = "default_marker_color")]
    pub marker_color: [f32; 4],
    /// Farbe der Tangenten-Griffe
    #[serde(default = "default_handle_color")]
    pub handle_color: [f32; 4],

    // ── Verhalten ───────────────────────────────────────────────
    /// Wie viele Marker um den Cursor gezeichnet werden (0 = alle)
    #[serde(default = "default_marker_window")]
    pub marker_window: usize,
    /// Anschluss des Folgesegments ("mirrored" oder "shared")
    #[serde(default)]
    pub segment_join: SegmentJoin,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE,
            background_color: BACKGROUND_COLOR,
            point_color: POINT_COLOR_DEFAULT,
            curve_color: CURVE_COLOR_DEFAULT,
            marker_color: MARKER_COLOR_DEFAULT,
            handle_color: HANDLE_COLOR,
            marker_window: MARKER_WINDOW,
            segment_join: SegmentJoin::default(),
        }
    }
}

fn default_window_size() -> [f32; 2] {
    WINDOW_SIZE
}

fn default_background_color() -> [f32; 4] {
    BACKGROUND_COLOR
}

fn default_point_color() -> [f32; 4] {
    POINT_COLOR_DEFAULT
}

fn default_curve_color() -> [f32; 4] {
    CURVE_COLOR_DEFAULT
}

fn default_marker_color() -> [f32; 4] {
    MARKER_COLOR_DEFAULT
}

fn default_handle_color() -> [f32; 4] {
    HANDLE_COLOR
}

fn default_marker_window() -> usize {
    MARKER_WINDOW
}

impl CurveOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_or_default(&content),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst TOML-Inhalt. Fehlerhafter Inhalt liefert Standardwerte.
    pub fn from_toml_or_default(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(opts) => {
                log::info!("Optionen geladen");
                opts
            }
            Err(e) => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("corner_cutting_curves"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(OPTIONS_FILE_NAME)
    }

    /// Farbpalette, mit der die Session ihre Puffer befüllt.
    pub fn palette(&self) -> CurvePalette {
        CurvePalette {
            point: self.point_color,
            curve: self.curve_color,
            marker: self.marker_color,
        }
    }
}
