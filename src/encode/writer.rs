use crate::value::Number;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Byte-buffer writer for the compact printer.
pub(crate) struct Writer {
    buffer: Vec<u8>,
}

impl Writer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn finish(self) -> String {
        String::from_utf8(self.buffer).expect("writer output must be valid UTF-8")
    }

    pub fn finish_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn push(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    pub fn push_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    /// Write a quoted string with standard JSON escaping. The solidus is
    /// not escaped.
    pub fn write_escaped(&mut self, s: &str) {
        self.buffer.push(b'"');
        for ch in s.chars() {
            match ch {
                '"' => self.push_str("\\\""),
                '\\' => self.push_str("\\\\"),
                '\n' => self.push_str("\\n"),
                '\r' => self.push_str("\\r"),
                '\t' => self.push_str("\\t"),
                '\u{8}' => self.push_str("\\b"),
                '\u{c}' => self.push_str("\\f"),
                ch if (ch as u32) < 0x20 => {
                    let code = ch as u32;
                    self.push_str("\\u00");
                    self.buffer.push(HEX[(code >> 4) as usize]);
                    self.buffer.push(HEX[(code & 0xf) as usize]);
                }
                ch if ch.is_ascii() => self.buffer.push(ch as u8),
                ch => {
                    let mut buf = [0u8; 4];
                    self.buffer.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                }
            }
        }
        self.buffer.push(b'"');
    }

    pub fn write_number(&mut self, number: &Number) {
        write_number_into(number, &mut self.buffer);
    }
}

/// Canonical number text: itoa for integers, ryu for floats. Non-finite
/// floats have no JSON form and print as `null`.
pub(crate) fn write_number_into(number: &Number, out: &mut Vec<u8>) {
    match number {
        Number::Int(value) => {
            let mut buf = itoa::Buffer::new();
            out.extend_from_slice(buf.format(*value).as_bytes());
        }
        Number::Float(value) => {
            if value.is_finite() {
                let mut buf = ryu::Buffer::new();
                out.extend_from_slice(buf.format(*value).as_bytes());
            } else {
                out.extend_from_slice(b"null");
            }
        }
    }
}
