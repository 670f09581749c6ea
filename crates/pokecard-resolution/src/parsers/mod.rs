//! Two parsers, one per rung, producing the same facet results.
//!
//! [`cached`] reads the JSON records stored in the local cache field by field.
//! [`remote`] reads the typed catalog payloads. The engine picks the parser
//! by the rung that produced the data, never by inspecting its shape.

pub mod cached;
pub mod remote;
