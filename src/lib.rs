//! Corner-Cutting Curves Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    ColoredVertex, CommitOutcome, CurveError, CurvePalette, CurveSession, SegmentJoin,
    SessionPhase, Snapshot,
};
pub use core::{MAX_CURVE, MAX_SEGMENTS, MAX_VERTEX};
pub use shared::{CurveOptions, RenderScene};
