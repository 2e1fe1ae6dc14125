// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Brickwrap Contributors

//! I/O module - importing meshes and exporting projection outputs

mod exporter;
mod importer;

pub use exporter::{export_obj, export_stl, write_layout_json};
pub use importer::import_stl;
