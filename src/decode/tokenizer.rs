//! Per-slice stack-machine tokenizer.

use crate::decode::parts::{Part, PartStack};
use crate::decode::token::{decode_escape, parse_bare};
use crate::error::Error;
use crate::value::{Object, Value};
use crate::Result;

/// Tokenize one slice into its partial parts stack.
///
/// Slices start outside any string literal (boundaries sit immediately
/// after top-level commas), so the only cross-slice state is structural:
/// openers left unclosed stay on the stack, and closers whose opener lies
/// in an earlier slice become open-end markers for the merge to resolve.
pub(crate) fn tokenize_slice(slice: &[u8]) -> Result<PartStack> {
    Tokenizer::new(slice).run()
}

struct Tokenizer<'a> {
    slice: &'a [u8],
    pos: usize,
    stack: PartStack,
    scratch: Vec<u8>,
    in_str: bool,
}

impl<'a> Tokenizer<'a> {
    fn new(slice: &'a [u8]) -> Self {
        Self {
            slice,
            pos: 0,
            stack: PartStack::new(),
            scratch: Vec::new(),
            in_str: false,
        }
    }

    fn run(mut self) -> Result<PartStack> {
        while let Some(&c) = self.slice.get(self.pos) {
            self.pos += 1;
            if self.in_str {
                self.string_byte(c)?;
            } else {
                self.normal_byte(c)?;
            }
        }
        if self.in_str {
            return Err(Error::UnterminatedString);
        }
        self.trim_scratch();
        self.flush_token()?;
        Ok(self.stack)
    }

    fn string_byte(&mut self, c: u8) -> Result<()> {
        match c {
            b'"' => {
                let text = String::from_utf8_lossy(&self.scratch).into_owned();
                self.scratch.clear();
                self.in_str = false;
                self.stack.push_value(Value::String(text));
            }
            b'\\' => self.pos = decode_escape(self.slice, self.pos, &mut self.scratch)?,
            b'\n' => return Err(Error::IllegalNewlineInString),
            _ => self.scratch.push(c),
        }
        Ok(())
    }

    fn normal_byte(&mut self, c: u8) -> Result<()> {
        match c {
            b'{' => {
                self.trim_scratch();
                if !self.scratch.is_empty() {
                    return Err(Error::UnexpectedTokenBeforeBracket(self.scratch_text()));
                }
                self.stack.push(Part::ObjectBegin);
            }
            b'[' => {
                self.trim_scratch();
                if !self.scratch.is_empty() {
                    return Err(Error::UnexpectedTokenBeforeBracket(self.scratch_text()));
                }
                self.stack.push(Part::ArrayBegin);
            }
            b'"' => {
                self.trim_scratch();
                if !self.scratch.is_empty() {
                    return Err(Error::UnexpectedTokenBeforeQuote(self.scratch_text()));
                }
                self.in_str = true;
            }
            b'}' => {
                self.trim_scratch();
                self.flush_token()?;
                self.stack.end_object(Object::new())?;
            }
            b']' => {
                self.trim_scratch();
                self.flush_token()?;
                self.stack.end_array(Vec::new())?;
            }
            b',' => {
                self.trim_scratch();
                self.flush_token()?;
            }
            b':' => {
                self.trim_scratch();
                if !self.scratch.is_empty() {
                    return Err(Error::UnexpectedTokenBeforeColon(self.scratch_text()));
                }
                self.stack.declare_member()?;
            }
            _ => {
                // Leading whitespace never enters the scratch token.
                if !self.scratch.is_empty() || !c.is_ascii_whitespace() {
                    self.scratch.push(c);
                }
            }
        }
        Ok(())
    }

    /// Flush the pending bare token, if any, as a completed value.
    fn flush_token(&mut self) -> Result<()> {
        if self.scratch.is_empty() {
            return Ok(());
        }
        let value = parse_bare(&self.scratch)?;
        self.scratch.clear();
        self.stack.push_value(value);
        Ok(())
    }

    fn trim_scratch(&mut self) {
        while self
            .scratch
            .last()
            .is_some_and(|c| c.is_ascii_whitespace())
        {
            self.scratch.pop();
        }
    }

    fn scratch_text(&self) -> String {
        String::from_utf8_lossy(&self.scratch).into_owned()
    }
}
