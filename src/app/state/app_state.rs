use crate::app::CommandLog;
use crate::core::CurveSession;
use crate::shared::CurveOptions;
use std::path::PathBuf;

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Kurven-Session (Punkte, Kurve, Marker, Snapshot)
    pub session: CurveSession,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Marker-Fenster, Segment-Anschluss)
    pub options: CurveOptions,
    /// Zieldatei für `SaveOptions`
    pub options_path: PathBuf,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen.
    pub fn new() -> Self {
        Self::with_options(CurveOptions::default())
    }

    /// Erstellt einen App-State, dessen Session Palette und Anschluss aus den Optionen übernimmt.
    pub fn with_options(options: CurveOptions) -> Self {
        Self {
            session: CurveSession::with_style(options.palette(), options.segment_join),
            view: ViewState::new(),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            options_path: CurveOptions::config_path(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl übernommener Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.session.count()
    }

    /// Gibt die Anzahl fertiger Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.session.complete_segment_count()
    }

    /// Marker-Fenster unter Berücksichtigung des View-Toggles (0 = alle).
    pub fn marker_window(&self) -> usize {
        if self.view.show_all_markers {
            0
        } else {
            self.options.marker_window
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
