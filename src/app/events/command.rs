use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Live-Punkt auf die Pointer-Position setzen
    TrackPointer { pos: Vec2 },
    /// Kontrollpunkt übernehmen
    CommitPoint { pos: Vec2 },
    /// Snapshot speichern
    SaveSnapshot,
    /// Snapshot wiederherstellen
    RestoreSnapshot,
    /// Session leeren
    ClearSession,
    /// Anwendung beenden
    RequestExit,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Anzeige aller Marker umschalten
    ToggleAllMarkers,
    /// Optionen speichern
    SaveOptions,
}

impl AppCommand {
    /// Gibt `true` zurück für Commands, die jeden Frame auftreten.
    pub fn is_per_frame(&self) -> bool {
        matches!(self, Self::TrackPointer { .. } | Self::SetViewportSize { .. })
    }
}
