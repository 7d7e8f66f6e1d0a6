//! Background job definitions and handlers
//!
//! This module contains the two scheduled tasks:
//! - Deadline notification sweeps over tracked audiovisuals and books
//! - Daily refresh of the cached external title metadata

pub mod deadline_notifications;
pub mod title_refresh;
