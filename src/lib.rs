//! Odontogram chart engine for the clinic front end.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws the
//! 32-tooth FDI chart on a `<canvas>`, styles each tooth by its clinical
//! condition and surface findings, highlights the selected tooth, and reports
//! clicks back to the host page. The host owns the records: it loads them,
//! edits them in response to clicks, and pushes fresh snapshots in. The chart
//! never writes anything back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`tooth`] | FDI identifiers, quadrants and the fixed chart order |
//! | [`doc`] | Tooth records, conditions, surfaces and the sparse record store |
//! | [`style`] | Condition styles, labels and legend |
//! | [`geometry`] | Points, rectangles, cell layout and tooth shapes |
//! | [`scene`] | The chart's visual tree, built from records and selection |
//! | [`hit`] | Hit-testing points against the scene |
//! | [`camera`] | Fitting the chart into the viewport |
//! | [`input`] | Pointer buttons and UI state |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`render`] | Canvas 2D drawing |
//! | [`summary`] | Per-condition counts and tooth descriptions |
//! | [`bridge`] | `wasm-bindgen` surface for the host page |
//! | [`config`] | Host-supplied chart configuration |
//! | [`error`] | Ingestion errors |
//! | [`consts`] | Shared constants (sizes, colors, selection scale) |

pub mod bridge;
pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod render;
pub mod scene;
pub mod style;
pub mod summary;
pub mod tooth;
