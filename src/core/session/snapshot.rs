use super::{CurveBuffers, CurveSession, SessionPhase};

/// Tiefe Kopie aller Puffer plus Zähler und Phase einer Session.
///
/// Palette, Anschluss-Strategie und der Snapshot-Slot selbst gehören nicht
/// zum Snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    buffers: CurveBuffers,
    count: usize,
    phase: SessionPhase,
    has_live: bool,
}

impl Snapshot {
    /// Erstellt einen Snapshot des aktuellen Session-Zustands.
    pub fn capture(session: &CurveSession) -> Self {
        Self {
            buffers: session.buffers.clone(),
            count: session.count,
            phase: session.phase,
            has_live: session.has_live,
        }
    }

    /// Schreibt den Snapshot in die Session zurück.
    pub(super) fn apply_to(&self, session: &mut CurveSession) {
        session.buffers.clone_from(&self.buffers);
        session.count = self.count;
        session.phase = self.phase;
        session.has_live = self.has_live;
    }

    /// Anzahl Kontrollpunkte zum Zeitpunkt des Speicherns.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Phase zum Zeitpunkt des Speicherns.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Gespeicherte Puffer.
    pub fn buffers(&self) -> &CurveBuffers {
        &self.buffers
    }
}
