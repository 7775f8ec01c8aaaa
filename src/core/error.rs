//! Fehlertypen der Kurven-Session.

use thiserror::Error;

/// Fehlerfälle beim Aufbau und Verwalten einer Kurven-Session.
///
/// Keiner der Fälle ist fatal. Nur `NoSnapshot` wird von einer öffentlichen
/// Operation zurückgegeben, die übrigen werden intern protokolliert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Wiederherstellen ohne vorher gespeicherten Snapshot
    #[error("kein Snapshot gespeichert")]
    NoSnapshot,
    /// Punktpuffer voll, Konstruktion ist abgeschlossen
    #[error("Kapazität von {max} Kontrollpunkten erreicht")]
    CapacityExceeded {
        /// Maximale Anzahl Kontrollpunkte
        max: usize,
    },
    /// Segment hat noch nicht genug Kontrollpunkte für eine Tessellierung
    #[error("Segment {segment} hat zu wenige Kontrollpunkte")]
    DegenerateSegment {
        /// Index des betroffenen Segments
        segment: usize,
    },
}
