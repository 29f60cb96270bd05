//! Interactive console front end for the payroll engine.
//!
//! The [`CommandLoop`] presents the numbered menu and dispatches each choice
//! to a [`PayrollService`](crate::payroll::PayrollService). It is generic
//! over its input and output so it can drive stdin/stdout or in-memory
//! buffers alike.

mod command_loop;
mod input;

pub use command_loop::{CommandLoop, MENU, MenuChoice};
pub use input::TokenReader;
