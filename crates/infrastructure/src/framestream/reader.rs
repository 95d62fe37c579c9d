//! Reader for Frame Streams, the length-prefixed container dnstap files and sockets use.
//!
//! Every frame starts with a 32-bit big-endian length. A zero length escapes a control
//! frame: another 32-bit length, a 32-bit control type, then `(type, length, bytes)` fields.

use dnstap_quiet_domain::DomainError;
use std::io::{ErrorKind, Read};
use tracing::{debug, trace};

/// Content type announced by dnstap writers in the START control frame.
pub const CONTENT_TYPE_DNSTAP: &[u8] = b"protobuf:dnstap.Dnstap";

pub const MAX_CONTROL_FRAME_LEN: usize = 512;
pub const MAX_DATA_FRAME_LEN: usize = 1024 * 1024;

const CONTROL_ACCEPT: u32 = 0x01;
const CONTROL_START: u32 = 0x02;
const CONTROL_STOP: u32 = 0x03;
const CONTROL_READY: u32 = 0x04;
const CONTROL_FINISH: u32 = 0x05;

const CONTROL_FIELD_CONTENT_TYPE: u32 = 0x01;

pub struct FrameStreamReader<R> {
    reader: R,
    started: bool,
    finished: bool,
    content_type: Option<Vec<u8>>,
}

impl<R: Read> FrameStreamReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            started: false,
            finished: false,
            content_type: None,
        }
    }

    /// Content type announced by START, once it has been read.
    pub fn content_type(&self) -> Option<&[u8]> {
        self.content_type.as_deref()
    }

    /// Next data frame, or `None` after STOP or a clean end of input.
    pub fn next_frame(&mut self) -> Result<Option<Vec<u8>>, DomainError> {
        while !self.finished {
            let len = match self.read_u32()? {
                Some(len) => len as usize,
                None => {
                    self.finished = true;
                    if self.started {
                        debug!("Frame stream ended without STOP");
                    }
                    return Ok(None);
                }
            };

            if len == 0 {
                self.read_control()?;
                continue;
            }

            if !self.started {
                return Err(DomainError::FrameStream(
                    "data frame before START control frame".to_string(),
                ));
            }
            if len > MAX_DATA_FRAME_LEN {
                return Err(DomainError::FrameStream(format!(
                    "data frame of {} bytes exceeds limit of {}",
                    len, MAX_DATA_FRAME_LEN
                )));
            }

            let mut frame = vec![0u8; len];
            self.read_body(&mut frame)?;
            trace!(len, "Read data frame");
            return Ok(Some(frame));
        }

        Ok(None)
    }

    fn read_control(&mut self) -> Result<(), DomainError> {
        let len = self.read_u32()?.ok_or_else(|| {
            DomainError::FrameStream("stream ended inside control frame".to_string())
        })? as usize;

        if !(4..=MAX_CONTROL_FRAME_LEN).contains(&len) {
            return Err(DomainError::FrameStream(format!(
                "invalid control frame length {}",
                len
            )));
        }

        let mut body = vec![0u8; len];
        self.read_body(&mut body)?;

        let control_type = be_u32(&body[..4]);
        let content_types = parse_content_types(&body[4..])?;

        match control_type {
            CONTROL_START => {
                if self.started {
                    return Err(DomainError::FrameStream("duplicate START".to_string()));
                }
                if let Some(content_type) = content_types.first() {
                    if content_type.as_slice() != CONTENT_TYPE_DNSTAP {
                        return Err(DomainError::FrameStream(format!(
                            "unexpected content type '{}'",
                            String::from_utf8_lossy(content_type)
                        )));
                    }
                    self.content_type = Some(content_type.clone());
                }
                self.started = true;
                debug!(
                    content_type = %String::from_utf8_lossy(self.content_type().unwrap_or_default()),
                    "Frame stream started"
                );
            }
            CONTROL_STOP => {
                self.finished = true;
                debug!("Frame stream stopped");
            }
            CONTROL_ACCEPT | CONTROL_READY | CONTROL_FINISH => {
                trace!(control_type, "Ignoring bidirectional control frame");
            }
            other => {
                return Err(DomainError::FrameStream(format!(
                    "unknown control frame type {:#x}",
                    other
                )));
            }
        }

        Ok(())
    }

    /// `None` on a clean end of input before the first byte.
    fn read_u32(&mut self) -> Result<Option<u32>, DomainError> {
        let mut buf = [0u8; 4];
        let mut filled = 0;

        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) if filled == 0 => return Ok(None),
                Ok(0) => {
                    return Err(DomainError::FrameStream(
                        "truncated frame length".to_string(),
                    ))
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(DomainError::IoError(e.to_string())),
            }
        }

        Ok(Some(u32::from_be_bytes(buf)))
    }

    fn read_body(&mut self, body: &mut [u8]) -> Result<(), DomainError> {
        self.reader.read_exact(body).map_err(|e| match e.kind() {
            ErrorKind::UnexpectedEof => {
                DomainError::FrameStream(format!("truncated frame of {} bytes", body.len()))
            }
            _ => DomainError::IoError(e.to_string()),
        })
    }
}

impl<R: Read> Iterator for FrameStreamReader<R> {
    type Item = Result<Vec<u8>, DomainError>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.next_frame();
        if next.is_err() {
            self.finished = true;
        }
        next.transpose()
    }
}

fn be_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn parse_content_types(mut fields: &[u8]) -> Result<Vec<Vec<u8>>, DomainError> {
    let mut content_types = Vec::new();

    while !fields.is_empty() {
        if fields.len() < 8 {
            return Err(DomainError::FrameStream(
                "truncated control field header".to_string(),
            ));
        }
        let field_type = be_u32(&fields[..4]);
        let field_len = be_u32(&fields[4..8]) as usize;
        let end = 8usize
            .checked_add(field_len)
            .filter(|end| *end <= fields.len())
            .ok_or_else(|| DomainError::FrameStream("control field exceeds frame".to_string()))?;

        if field_type == CONTROL_FIELD_CONTENT_TYPE {
            content_types.push(fields[8..end].to_vec());
        }
        fields = &fields[end..];
    }

    Ok(content_types)
}
