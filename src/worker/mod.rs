//! Background worker thread for file-backed contact reads.
//!
//! This module implements the worker thread that reads the contact file so the
//! plugin UI thread is never blocked on I/O. It uses Zellij's worker API for
//! cross-thread communication and carries tracing context across the boundary.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::ContactsWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
