//! Core-Domänentypen: Bézier-Auswertung, Vertex-Puffer, Marker, Kurven-Session.

pub mod bezier;
pub mod buffers;
pub mod error;
pub mod marker;
pub mod pointer;
/// Kurven-Session mit Punkt-, Kurven- und Markerpuffern
///
/// Dieses Modul definiert den zentralen Zustand:
/// - CurveSession: sammelt Kontrollpunkte und tesselliert Segmente
/// - Snapshot: tiefe Kopie für Speichern/Laden
/// - CommitOutcome: Ergebnis eines Klicks
pub mod session;

pub use bezier::{cubic_bezier, sample_cubic};
pub use buffers::{
    ColoredVertex, CurveBuffers, MAX_CURVE, MAX_SEGMENTS, MAX_VERTEX, SEGMENT_POINTS,
};
pub use error::CurveError;
pub use marker::{marker_for, MARKER_VERTEX_COUNT};
pub use pointer::normalize_pointer;
pub use session::{
    CommitOutcome, CurvePalette, CurveSession, SegmentJoin, SessionPhase, Snapshot,
    CURVE_COLOR_DEFAULT, MARKER_COLOR_DEFAULT, POINT_COLOR_DEFAULT,
};
