//! HTTP web module: server, routing, and view rendering.

pub mod app;
