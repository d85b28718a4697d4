/// Transformed bytes waiting to be handed to the caller.
///
/// Delivered bytes leave strictly from the front, so the unread region is
/// always `bytes[start..]`.
#[derive(Debug, Default)]
pub(crate) struct PendingOutput {
    bytes: Vec<u8>,
    start: usize,
}

impl PendingOutput {
    pub(crate) fn is_empty(&self) -> bool {
        self.start == self.bytes.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.bytes.len() - self.start
    }

    /// Returns the storage new output is appended to.
    pub(crate) fn sink(&mut self) -> &mut Vec<u8> {
        if self.start > 0 {
            self.bytes.drain(..self.start);
            self.start = 0;
        }
        &mut self.bytes
    }

    /// Copies as many pending bytes as fit into `buf` and returns the count.
    pub(crate) fn deliver(&mut self, buf: &mut [u8]) -> usize {
        let available = &self.bytes[self.start..];
        let count = available.len().min(buf.len());
        buf[..count].copy_from_slice(&available[..count]);
        self.start += count;

        if self.is_empty() {
            self.bytes.clear();
            self.start = 0;
        }
        count
    }
}
