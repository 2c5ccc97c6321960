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

use std::io;

use super::source::{ReadStatus, StreamSource};

pub(crate) const MIN_CAPACITY: usize = 16;
pub(crate) const DEFAULT_CAPACITY: usize = 256;

/// Fixed-capacity staging buffer between a raw stream and the line
/// assembly loop. `eof` flips at most once and is never reset.
pub(crate) struct BufferWindow {
    temp: Box<[u8]>,
    size: usize,
    cursor: usize,
    eof: bool,
}

impl BufferWindow {
    // Capacities below the floor are silently raised, not rejected.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            temp: vec![0u8; capacity.max(MIN_CAPACITY)].into_boxed_slice(),
            size: 0,
            cursor: 0,
            eof: false,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.temp.len()
    }

    pub(crate) fn has_next(&self) -> bool {
        self.cursor < self.size
    }

    // Callers must check has_next first; taking past `size` panics.
    pub(crate) fn take(&mut self) -> u8 {
        let byte = self.temp[..self.size][self.cursor];
        self.cursor += 1;
        byte
    }

    /// One bulk read from the source. Returns `Ok(false)` once the source
    /// has reported end-of-stream; from then on the source is never touched.
    pub(crate) fn fill<S: StreamSource>(&mut self, source: &mut S) -> io::Result<bool> {
        if self.eof {
            return Ok(false);
        }

        match source.read(&mut self.temp)? {
            ReadStatus::Data(count) => {
                self.size = count;
                self.cursor = 0;
                Ok(true)
            }
            ReadStatus::Eof => {
                self.eof = true;
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts reads so tests can prove the window stops touching an
    /// exhausted source.
    struct CountingSource {
        data: Vec<u8>,
        consumed: bool,
        reads: usize,
    }

    impl CountingSource {
        fn new(data: &[u8]) -> Self {
            Self {
                data: data.to_vec(),
                consumed: false,
                reads: 0,
            }
        }
    }

    impl StreamSource for CountingSource {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<ReadStatus> {
            self.reads += 1;
            if self.consumed {
                return Ok(ReadStatus::Eof);
            }

            let count = self.data.len().min(buf.len());
            buf[..count].copy_from_slice(&self.data[..count]);
            self.consumed = true;
            Ok(ReadStatus::Data(count))
        }

        fn close(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_capacity_clamped_to_floor() {
        assert_eq!(BufferWindow::with_capacity(1).capacity(), MIN_CAPACITY);
        assert_eq!(BufferWindow::with_capacity(0).capacity(), MIN_CAPACITY);
        assert_eq!(BufferWindow::with_capacity(15).capacity(), MIN_CAPACITY);
    }

    #[test]
    fn test_capacity_above_floor_kept() {
        assert_eq!(BufferWindow::with_capacity(16).capacity(), 16);
        assert_eq!(BufferWindow::with_capacity(4096).capacity(), 4096);
    }

    #[test]
    fn test_fill_resets_cursor_and_size() {
        let mut window = BufferWindow::with_capacity(16);
        let mut source = CountingSource::new(b"abc");

        assert!(!window.has_next());
        assert!(window.fill(&mut source).unwrap());
        assert!(window.has_next());
        assert_eq!(window.take(), b'a');
        assert_eq!(window.take(), b'b');
        assert_eq!(window.take(), b'c');
        assert!(!window.has_next());
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut window = BufferWindow::with_capacity(16);
        let mut source = CountingSource::new(b"");
        source.consumed = true;

        assert!(!window.fill(&mut source).unwrap());
        assert_eq!(source.reads, 1);

        // Further fills must not reach the source again.
        assert!(!window.fill(&mut source).unwrap());
        assert!(!window.fill(&mut source).unwrap());
        assert_eq!(source.reads, 1);
    }

    #[test]
    #[should_panic]
    fn test_take_past_end_panics() {
        let mut window = BufferWindow::with_capacity(16);
        window.take();
    }
}
