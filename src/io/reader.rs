// SPDX-License-Identifier: Mulan PSL v2
/*
 * Copyright (c) 2026 crlf-io Contributors
 * crlf-io is licensed under Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *         http://license.coscl.org.cn/MulanPSL2
 *
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND,
 * EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT,
 * MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

use std::{
    ffi::OsString,
    io::{self, Read},
    os::unix::prelude::OsStringExt,
};

use super::{
    buffer::{BufferWindow, DEFAULT_CAPACITY},
    source::{IoSource, StreamSource},
};

const CR: u8 = b'\r';
const LF: u8 = b'\n';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    Scanning { pending_cr: bool },
    Ended,
}

/// Strict CRLF line reader.
///
/// Only the exact two-byte sequence `\r\n` terminates a line. A lone `\r`
/// or lone `\n` anywhere in the stream is ordinary data and appears
/// verbatim in the returned line; lines come back as [`OsString`], so any
/// byte sequence, UTF-8 or not, round-trips unmodified.
///
/// ```
/// use crlf_io::io::ReadCrlfLines;
///
/// let mut reader = (&b"a\r\nb\nc"[..]).crlf_lines();
/// assert_eq!(reader.next_line().unwrap().unwrap(), "a");
/// assert_eq!(reader.next_line().unwrap().unwrap(), "b\nc");
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct CrlfReader<S> {
    source: S,
    window: BufferWindow,
    line: Vec<u8>,
    state: ReaderState,
}

impl<S: StreamSource> CrlfReader<S> {
    pub fn new(source: S) -> Self {
        Self::with_capacity(source, DEFAULT_CAPACITY)
    }

    /// Capacity is purely a performance knob: the produced lines do not
    /// depend on it, and values below the window floor are silently raised.
    pub fn with_capacity(source: S, capacity: usize) -> Self {
        Self {
            source,
            window: BufferWindow::with_capacity(capacity),
            line: Vec::new(),
            state: ReaderState::Scanning { pending_cr: false },
        }
    }

    /// Effective window capacity, after clamping.
    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    /// Produces the next logical line, or `Ok(None)` once the stream is
    /// exhausted. After that every further call returns `Ok(None)` again,
    /// without touching the source.
    pub fn next_line(&mut self) -> io::Result<Option<OsString>> {
        if self.state == ReaderState::Ended {
            return Ok(None);
        }

        self.line.clear();
        self.state = ReaderState::Scanning { pending_cr: false };

        loop {
            while self.window.has_next() {
                let byte = self.window.take();

                if matches!(self.state, ReaderState::Scanning { pending_cr: true }) {
                    if byte == LF {
                        // The held-back CR plus this LF completes the pair.
                        return Ok(Some(self.produce()));
                    }
                    // The held-back CR was plain data after all.
                    self.line.push(CR);
                }

                if byte == CR {
                    // Held back until the next byte resolves its role.
                    self.state = ReaderState::Scanning { pending_cr: true };
                } else {
                    self.state = ReaderState::Scanning { pending_cr: false };
                    self.line.push(byte);
                }
            }

            // pending_cr survives the refill: a CR at the last position of
            // one fill is resolved by the first byte of the next one.
            if !self.window.fill(&mut self.source)? {
                break;
            }
        }

        // Source exhausted. A still-unresolved CR belongs to the data.
        if matches!(self.state, ReaderState::Scanning { pending_cr: true }) {
            self.line.push(CR);
        }
        self.state = ReaderState::Ended;

        if self.line.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.produce()))
    }

    fn produce(&mut self) -> OsString {
        OsString::from_vec(self.line.clone())
    }

    /// Releases the underlying source. Consumes the reader; it cannot be
    /// used afterwards.
    pub fn close(mut self) -> io::Result<()> {
        self.source.close()
    }
}

impl<S: StreamSource> Iterator for CrlfReader<S> {
    type Item = io::Result<OsString>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

pub trait ReadCrlfLines: Read {
    fn crlf_lines(self) -> CrlfReader<IoSource<Self>>
    where
        Self: Sized,
    {
        CrlfReader::new(IoSource::new(self))
    }

    fn crlf_lines_with_capacity(self, capacity: usize) -> CrlfReader<IoSource<Self>>
    where
        Self: Sized,
    {
        CrlfReader::with_capacity(IoSource::new(self), capacity)
    }
}

impl<R: Read> ReadCrlfLines for R {}
