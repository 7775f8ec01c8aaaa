//! UI-Komponenten: Menü, Statusleiste, Input-Handling.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert Menüleiste und Statusleiste.
/// Keyboard-Shortcuts sind in eine eigene Datei ausgelagert.
pub mod menu;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use status::render_status_bar;
