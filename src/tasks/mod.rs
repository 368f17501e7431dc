//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - TTL Cleanup: Removes expired items from a table at a configured interval

mod cleanup;

pub(crate) use cleanup::spawn_cleanup_task;
