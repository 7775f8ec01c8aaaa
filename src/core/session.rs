//! Kurven-Session: Kontrollpunkte sammeln, Segmente tessellieren, Snapshot.
//!
//! Die Session ist die einzige Quelle der Wahrheit für Punkte, Kurve und
//! Marker. Statt zweier Zähler (`count`/`index`) gibt es einen Zähler
//! `count` plus eine explizite Phase; der Cursor `index()` wird abgeleitet.

mod snapshot;


pub use snapshot::Snapshot;

use super::buffers::{
    ColoredVertex, CurveBuffers, MAX_CURVE, MAX_SEGMENTS, MAX_VERTEX, SEGMENT_POINTS,
};
use super::error::CurveError;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Grau für Kontrollpunkte (RGBA).
pub const POINT_COLOR_DEFAULT: [f32; 4] = [0.502, 0.502, 0.502, 1.0];
/// HotPink für die tessellierte Kurve (RGBA).
pub const CURVE_COLOR_DEFAULT: [f32; 4] = [1.0, 0.412, 0.706, 1.0];
/// LightPink für Marker (RGBA).
pub const MARKER_COLOR_DEFAULT: [f32; 4] = [1.0, 0.714, 0.757, 1.0];

/// Phase der Session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Noch kein Punkt übernommen
    #[default]
    Empty,
    /// Punkte werden gesammelt
    Building,
    /// Kapazität erreicht, weitere Klicks werden ignoriert
    Finalized,
}

/// Wie das nächste Segment an ein abgeschlossenes anschließt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentJoin {
    /// Nur der gespiegelte Punkt `last + (last - second_to_last)` wird erzeugt
    #[default]
    Mirrored,
    /// Endpunkt wird dupliziert, danach folgt der gespiegelte Punkt (C0-Übergang)
    Shared,
}

/// Farben, mit denen die Session ihre Puffer befüllt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePalette {
    /// Farbe der Kontrollpunkte
    pub point: [f32; 4],
    /// Farbe der Kurvenabtastung
    pub curve: [f32; 4],
    /// Farbe der Marker
    pub marker: [f32; 4],
}

impl Default for CurvePalette {
    fn default() -> Self {
        Self {
            point: POINT_COLOR_DEFAULT,
            curve: CURVE_COLOR_DEFAULT,
            marker: MARKER_COLOR_DEFAULT,
        }
    }
}

/// Ergebnis eines Klicks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommitOutcome {
    /// Session ist abgeschlossen, nichts passiert
    Ignored,
    /// Punkt übernommen, Segment noch offen
    Committed,
    /// Vierter Punkt übernommen, Segment fertig tesselliert
    SegmentCompleted {
        /// Index des abgeschlossenen Segments
        segment: usize,
        /// Gespiegelter Startpunkt des Folgesegments (None bei voller Kapazität)
        anchor: Option<Vec2>,
    },
}

/// Besitzt alle Puffer, den Zähler und den Snapshot-Slot.
#[derive(Debug, Clone)]
pub struct CurveSession {
    buffers: CurveBuffers,
    count: usize,
    phase: SessionPhase,
    /// Slot `count` enthält eine Live-Vorschau der Pointer-Position
    has_live: bool,
    palette: CurvePalette,
    join: SegmentJoin,
    snapshot: Option<Snapshot>,
}

impl Default for CurveSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveSession {
    /// Erstellt eine leere Session mit Standardfarben und gespiegeltem Anschluss.
    pub fn new() -> Self {
        Self::with_style(CurvePalette::default(), SegmentJoin::default())
    }

    /// Erstellt eine leere Session mit eigener Palette und Anschluss-Strategie.
    pub fn with_style(palette: CurvePalette, join: SegmentJoin) -> Self {
        Self {
            buffers: CurveBuffers::new(),
            count: 0,
            phase: SessionPhase::Empty,
            has_live: false,
            palette,
            join,
            snapshot: None,
        }
    }

    // ── Abfragen ────────────────────────────────────────────────────

    /// Aktuelle Phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Gibt `true` zurück, wenn keine weiteren Punkte angenommen werden.
    pub fn is_finalized(&self) -> bool {
        self.phase == SessionPhase::Finalized
    }

    /// Anzahl übernommener Kontrollpunkte.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Cursor: Slot des Live-Punkts, bei Abschluss auf `MAX_VERTEX` fixiert.
    pub fn index(&self) -> usize {
        self.count.min(MAX_VERTEX)
    }

    /// Anschluss-Strategie für Folgesegmente.
    pub fn segment_join(&self) -> SegmentJoin {
        self.join
    }

    /// Farbpalette der Session.
    pub fn palette(&self) -> CurvePalette {
        self.palette
    }

    /// Übernommene Kontrollpunkte in Einfügereihenfolge.
    pub fn points(&self) -> &[ColoredVertex] {
        &self.buffers.points()[..self.count]
    }

    /// Live-Vorschaupunkt an der Cursor-Position.
    pub fn live_point(&self) -> Option<Vec2> {
        if !self.has_live {
            return None;
        }
        self.buffers.point(self.count).map(|v| v.position)
    }

    /// Zugriff auf die rohen Puffer.
    pub fn buffers(&self) -> &CurveBuffers {
        &self.buffers
    }

    /// Abtastpunkte des Segments `segment`.
    pub fn segment_slice(&self, segment: usize) -> Option<&[ColoredVertex]> {
        self.buffers.segment_slice(segment)
    }

    /// Marker-Vertices des Punkts `index`.
    pub fn marker_slice(&self, index: usize) -> Option<&[ColoredVertex]> {
        self.buffers.marker_slice(index)
    }

    /// Anzahl vollständig übernommener Segmente.
    pub fn complete_segment_count(&self) -> usize {
        self.count / SEGMENT_POINTS
    }

    /// Vertices der Kurve, die gezeichnet werden (inkl. Vorschau-Segment).
    pub fn curve_vertex_count(&self) -> usize {
        (self.available_points() / SEGMENT_POINTS).min(MAX_SEGMENTS) * MAX_CURVE
    }

    /// Punkte des Segments im Aufbau inkl. Live-Punkt (Tangenten-Griffe).
    pub fn handle_vertices(&self) -> &[ColoredVertex] {
        let start = (self.count / SEGMENT_POINTS) * SEGMENT_POINTS;
        let end = self.available_points();
        self.buffers.points().get(start..end).unwrap_or(&[])
    }

    /// Indizes der Marker, die um den Cursor herum gezeichnet werden.
    ///
    /// `window == 0` liefert alle belegten Marker.
    pub fn visible_marker_range(&self, window: usize) -> Range<usize> {
        let end = self.available_points();
        let start = if window == 0 {
            0
        } else {
            end.saturating_sub(window)
        };
        start..end
    }

    /// Gibt `true` zurück, wenn ein Snapshot gespeichert ist.
    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Gespeicherter Snapshot (falls vorhanden).
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Belegte Punkt-Slots: übernommene Punkte plus ggf. Live-Punkt.
    fn available_points(&self) -> usize {
        (self.count + usize::from(self.has_live)).min(MAX_VERTEX)
    }

    // ── Eingabe ─────────────────────────────────────────────────────

    /// Schreibt die aktuelle Pointer-Position als Live-Punkt (einmal pro Frame).
    ///
    /// Fehlt nur noch der vierte Punkt eines Segments, wird das Segment
    /// vorläufig mit der Pointer-Position als P3 tesselliert.
    pub fn track_pointer(&mut self, position: Vec2) {
        if self.is_finalized() || self.count >= MAX_VERTEX {
            return;
        }

        let index = self.count;
        self.buffers
            .set_point(index, ColoredVertex::new(position, self.palette.point));
        self.buffers
            .set_marker(index, position, self.palette.marker);
        self.has_live = true;

        if self.count % SEGMENT_POINTS == SEGMENT_POINTS - 1 {
            self.tessellate_segment(self.count / SEGMENT_POINTS);
        }
    }

    /// Übernimmt `position` als nächsten Kontrollpunkt (Mausklick).
    ///
    /// Schließt der Punkt ein Segment ab, werden alle Segmente neu tesselliert
    /// und der Startpunkt des Folgesegments gespiegelt erzeugt.
    pub fn commit(&mut self, position: Vec2) -> CommitOutcome {
        if self.is_finalized() {
            log::debug!(
                "Klick ignoriert: {}",
                CurveError::CapacityExceeded { max: MAX_VERTEX }
            );
            return CommitOutcome::Ignored;
        }

        if !self.push_point(position) {
            return CommitOutcome::Ignored;
        }

        if self.count % SEGMENT_POINTS != 0 {
            return CommitOutcome::Committed;
        }

        let segment = self.count / SEGMENT_POINTS - 1;
        self.tessellate_all();
        let anchor = self.synthesize_anchor();

        log::info!(
            "Segment {} abgeschlossen ({} Punkte, Anker: {:?})",
            segment,
            self.count,
            anchor
        );

        CommitOutcome::SegmentCompleted { segment, anchor }
    }

    /// Erzeugt den Startpunkt des Folgesegments aus den letzten zwei Punkten.
    fn synthesize_anchor(&mut self) -> Option<Vec2> {
        let last = self.buffers.point(self.count.checked_sub(1)?)?.position;
        let second_to_last = self.buffers.point(self.count.checked_sub(2)?)?.position;
        let anchor = last + (last - second_to_last);

        if self.join == SegmentJoin::Shared && !self.push_point(last) {
            return None;
        }
        self.push_point(anchor).then_some(anchor)
    }

    /// Hängt einen Punkt samt Marker an. Prüft die Kapazität vor dem Zählen.
    fn push_point(&mut self, position: Vec2) -> bool {
        if self.count >= MAX_VERTEX {
            self.phase = SessionPhase::Finalized;
            return false;
        }

        let index = self.count;
        self.buffers
            .set_point(index, ColoredVertex::new(position, self.palette.point));
        self.buffers
            .set_marker(index, position, self.palette.marker);
        self.count += 1;
        self.has_live = false;

        self.phase = if self.count >= MAX_VERTEX {
            log::info!("Kapazität von {} Punkten erreicht, Kurve abgeschlossen", MAX_VERTEX);
            SessionPhase::Finalized
        } else {
            SessionPhase::Building
        };
        true
    }

    // ── Tessellierung ───────────────────────────────────────────────

    /// Tesselliert Segment `segment` neu, sofern seine vier Punkte vorliegen
    /// (übernommen oder als Live-Vorschau für P3).
    ///
    /// Gibt `false` zurück, wenn das Segment zu wenige Punkte hat; der
    /// Pufferbereich bleibt dann unverändert.
    pub fn tessellate_segment(&mut self, segment: usize) -> bool {
        match self.segment_control_points(segment) {
            Ok(control) => self
                .buffers
                .write_segment(segment, control, self.palette.curve),
            Err(err) => {
                log::debug!("Tessellierung übersprungen: {}", err);
                false
            }
        }
    }

    /// Tesselliert alle vollständigen und vorläufigen Segmente ab Index 0.
    ///
    /// Gibt die Anzahl neu berechneter Segmente zurück.
    pub fn tessellate_all(&mut self) -> usize {
        let segments = (self.available_points() / SEGMENT_POINTS).min(MAX_SEGMENTS);
        (0..segments)
            .filter(|&segment| self.tessellate_segment(segment))
            .count()
    }

    fn segment_control_points(&self, segment: usize) -> Result<[Vec2; 4], CurveError> {
        let degenerate = CurveError::DegenerateSegment { segment };
        if segment >= MAX_SEGMENTS {
            return Err(degenerate);
        }

        let start = segment * SEGMENT_POINTS;
        if start + SEGMENT_POINTS > self.available_points() {
            return Err(degenerate);
        }

        let point = |i: usize| self.buffers.point(start + i).map(|v| v.position);
        match (point(0), point(1), point(2), point(3)) {
            (Some(p0), Some(p1), Some(p2), Some(p3)) => Ok([p0, p1, p2, p3]),
            _ => Err(degenerate),
        }
    }

    // ── Snapshot / Löschen ──────────────────────────────────────────

    /// Kopiert Puffer und Zähler in den Snapshot-Slot (überschreibt).
    pub fn save(&mut self) -> &Snapshot {
        let snapshot = Snapshot::capture(self);
        log::info!("Snapshot gespeichert ({} Punkte)", snapshot.count());
        self.snapshot.insert(snapshot)
    }

    /// Stellt den gespeicherten Snapshot wieder her.
    ///
    /// Ohne vorheriges `save()` bleibt die Session unverändert und
    /// `CurveError::NoSnapshot` wird zurückgegeben.
    pub fn restore(&mut self) -> Result<(), CurveError> {
        let snapshot = self.snapshot.take().ok_or(CurveError::NoSnapshot)?;
        self.restore_from(&snapshot);
        self.snapshot = Some(snapshot);
        log::info!("Snapshot wiederhergestellt ({} Punkte)", self.count);
        Ok(())
    }

    /// Übernimmt Puffer, Zähler und Phase aus einem beliebigen Snapshot.
    pub fn restore_from(&mut self, snapshot: &Snapshot) {
        snapshot.apply_to(self);
    }

    /// Setzt alle Puffer und den Zähler zurück. Der Snapshot bleibt erhalten.
    pub fn clear(&mut self) {
        self.buffers.reset();
        self.count = 0;
        self.has_live = false;
        self.phase = SessionPhase::Empty;
        log::info!("Session geleert");
    }
}
