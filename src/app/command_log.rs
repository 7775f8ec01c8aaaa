//! Verlauf der ausgeführten Commands (ohne Per-Frame-Commands).

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Per-Frame-Commands (Pointer, Viewport) werden nicht geloggt.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if command.is_per_frame() {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_per_frame_commands_are_skipped() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::TrackPointer { pos: Vec2::ZERO });
        log.record(&AppCommand::SetViewportSize {
            size: [100.0, 100.0],
        });
        assert!(log.is_empty());

        log.record(&AppCommand::CommitPoint { pos: Vec2::ZERO });
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_log_is_capped() {
        let mut log = CommandLog::new();
        for _ in 0..(CommandLog::MAX_ENTRIES + 10) {
            log.record(&AppCommand::SaveSnapshot);
        }
        assert!(log.len() <= CommandLog::MAX_ENTRIES);
        assert_eq!(log.entries().last(), Some(&AppCommand::SaveSnapshot));
    }
}
