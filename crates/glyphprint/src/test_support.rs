//! Test support utilities for glyphprint.
//!
//! This module provides helper targets that are useful for testing
//! rendering, but are not part of the public API.

use std::io;

use crate::{Color, Position, RenderTarget};

/// One call received by a [`BufferTarget`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Reset,
    Line {
        position: Position,
        color: Color,
        text: String,
    },
}

/// A memory target useful for tests.
///
/// Records every reset and line in call order so they can be inspected.
#[derive(Default)]
pub struct BufferTarget {
    pub events: Vec<Event>,
}

impl BufferTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every line drawn, in order.
    pub fn lines(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Line { text, .. } => Some(text.clone()),
                Event::Reset => None,
            })
            .collect()
    }

    /// Positions of every line drawn, in order.
    pub fn positions(&self) -> Vec<Position> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Line { position, .. } => Some(*position),
                Event::Reset => None,
            })
            .collect()
    }
}

impl RenderTarget for BufferTarget {
    fn reset(&mut self) -> io::Result<()> {
        self.events.push(Event::Reset);
        Ok(())
    }

    fn line(&mut self, position: Position, color: Color, text: &str) -> io::Result<()> {
        self.events.push(Event::Line {
            position,
            color,
            text: text.to_string(),
        });
        Ok(())
    }
}

/// Accepts `fail_after` lines, then fails every further line write.
/// Resets always succeed and are counted.
pub struct FailingTarget {
    fail_after: usize,
    pub lines_written: usize,
    pub resets: usize,
}

impl FailingTarget {
    pub fn new(fail_after: usize) -> Self {
        Self {
            fail_after,
            lines_written: 0,
            resets: 0,
        }
    }
}

impl RenderTarget for FailingTarget {
    fn reset(&mut self) -> io::Result<()> {
        self.resets += 1;
        Ok(())
    }

    fn line(&mut self, _position: Position, _color: Color, _text: &str) -> io::Result<()> {
        if self.lines_written >= self.fail_after {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"));
        }
        self.lines_written += 1;
        Ok(())
    }
}
