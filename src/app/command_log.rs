//! Command-Log mit Zählern für Drag- und Scroll-Aktivität.
//!
//! Die Einträge sind auf `MAX_ENTRIES` begrenzt; die Zähler laufen über die
//! gesamte Sitzung und gehen beim Kürzen nicht verloren.

use super::AppCommand;
use std::collections::VecDeque;

/// Speichert ausgeführte Commands in Reihenfolge und zählt Kurven-Interaktionen.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    drags_started: usize,
    sample_adjustments: usize,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu; der älteste Eintrag fällt bei vollem Log heraus.
    pub fn record(&mut self, command: &AppCommand) {
        match command {
            AppCommand::BeginDrag { .. } => self.drags_started += 1,
            AppCommand::AdjustSampleCount { .. } => self.sample_adjustments += 1,
            _ => {}
        }
        if self.entries.len() == Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
    }

    /// Anzahl der gehaltenen Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Einträge, ältester zuerst.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &AppCommand> + '_ {
        self.entries.iter()
    }

    /// Letzter ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Pointer-Down-Versuche auf dem Canvas (auch ohne Treffer).
    pub fn drags_started(&self) -> usize {
        self.drags_started
    }

    /// Scroll-Ereignisse, die die Sample-Anzahl ändern sollten.
    pub fn sample_adjustments(&self) -> usize {
        self.sample_adjustments
    }
}
