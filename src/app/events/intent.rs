use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Pointer wurde im Viewport bewegt (normalisierte Koordinaten)
    PointerMoved { pos: Vec2 },
    /// Primärklick im Viewport: Punkt übernehmen (normalisierte Koordinaten)
    PointCommitRequested { pos: Vec2 },
    /// Aktuelle Kurve in den Snapshot-Slot kopieren
    SaveSnapshotRequested,
    /// Snapshot wiederherstellen
    LoadSnapshotRequested,
    /// Alle Punkte und Kurven verwerfen
    ClearRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Zwischen "alle Marker" und Marker-Fenster um den Cursor umschalten
    ToggleAllMarkersRequested,
    /// Aktuelle Optionen in die TOML-Datei schreiben
    SaveOptionsRequested,
}
