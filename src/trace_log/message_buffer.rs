use std::{ffi::CStr, fmt};

/// Capacity of the render buffer, terminator included.
///
/// Rendered text keeps at most `MESSAGE_CAPACITY - 1` bytes; multibyte text
/// may come out up to 3 bytes shorter, since Rust cuts on a character
/// boundary while the C helper cuts by byte.
pub const MESSAGE_CAPACITY: usize = 4096;

/// Fixed-size, NUL-terminated render target for a single log line.
///
/// Rendering past `MESSAGE_CAPACITY - 1` bytes is silently dropped, the way
/// `vsnprintf` truncates. The cut lands on a UTF-8 character boundary so the
/// text stays valid `str`.
pub struct MessageBuffer {
    buf: [u8; MESSAGE_CAPACITY],
    len: usize,
    truncated: bool,
}

impl MessageBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0; MESSAGE_CAPACITY],
            len: 0,
            truncated: false,
        }
    }

    /// Renders `args` into a fresh buffer.
    #[must_use]
    pub fn render(args: fmt::Arguments<'_>) -> Self {
        let mut out = Self::new();
        // Our `write_str` never fails; an `Err` can only come from a
        // `Display` impl, in which case whatever was written so far is kept.
        let _ = fmt::write(&mut out, args);
        out
    }

    /// Copies `text` into a fresh buffer, with the same truncation rule.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut out = Self::new();
        out.push_str(text);
        out
    }

    /// Rendered text up to the first NUL, as a C string would read it.
    #[must_use]
    pub fn as_c_str(&self) -> &CStr {
        // buf[len] is always 0, so a terminator exists.
        CStr::from_bytes_until_nul(&self.buf[..=self.len]).unwrap_or_default()
    }

    /// Rendered text up to the first NUL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        let end = self.buf[..self.len]
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.len);
        // Only whole `str` prefixes are ever copied in.
        std::str::from_utf8(&self.buf[..end]).unwrap_or_default()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether any output was dropped for lack of room.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    fn push_str(&mut self, s: &str) {
        if self.truncated {
            return;
        }
        let room = MESSAGE_CAPACITY - 1 - self.len;
        let take = if s.len() <= room {
            s.len()
        } else {
            self.truncated = true;
            floor_char_boundary(s, room)
        };
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        self.buf[self.len] = 0;
    }
}

impl Default for MessageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for MessageBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for MessageBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuffer")
            .field("text", &self.as_str())
            .field("truncated", &self.truncated)
            .finish()
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
