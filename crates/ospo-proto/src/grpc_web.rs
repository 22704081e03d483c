//! gRPC-Web framing (binary mode).
//!
//! Every frame is `flag: u8 | length: u32 big-endian | payload`. Flag `0x00`
//! carries a protobuf message; flag `0x80` carries trailers as HTTP/1-style
//! `key: value\r\n` lines. Compressed frames (`0x01`) are not supported.

use crate::{ProtoError, ProtoResult};

use std::panic::Location;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use error_location::ErrorLocation;
use prost::Message;

pub const CONTENT_TYPE: &str = "application/grpc-web+proto";
pub const FRAME_HEADER_LEN: usize = 5;
pub const DATA_FLAG: u8 = 0x00;
pub const TRAILER_FLAG: u8 = 0x80;

pub const STATUS_HEADER: &str = "grpc-status";
pub const MESSAGE_HEADER: &str = "grpc-message";

/// gRPC status code 0
pub const STATUS_OK: i32 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Data(Bytes),
    Trailers(Trailers),
}

/// Trailer metadata. Keys are lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trailers {
    entries: Vec<(String, String)>,
}

impl Trailers {
    pub fn parse(block: &[u8]) -> Self {
        let text = String::from_utf8_lossy(block);
        let entries = text
            .lines()
            .filter_map(|line| {
                let (key, value) = line.split_once(':')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                Some((key.to_ascii_lowercase(), value.trim().to_string()))
            })
            .collect();

        Self { entries }
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.entries.push((key.to_ascii_lowercase(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The call outcome, if the trailers carried one
    pub fn status(&self) -> Option<GrpcStatus> {
        let code = self.get(STATUS_HEADER)?.parse().ok()?;
        Some(GrpcStatus {
            code,
            message: self.get(MESSAGE_HEADER).unwrap_or_default().to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as a trailer frame payload
    pub fn to_block(&self) -> Bytes {
        let mut block = BytesMut::new();
        for (key, value) in &self.entries {
            block.put_slice(key.as_bytes());
            block.put_slice(b": ");
            block.put_slice(value.as_bytes());
            block.put_slice(b"\r\n");
        }
        block.freeze()
    }
}

/// `grpc-status` / `grpc-message` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrpcStatus {
    pub code: i32,
    pub message: String,
}

impl GrpcStatus {
    pub fn is_ok(&self) -> bool {
        self.code == STATUS_OK
    }
}

/// Decoded body of a unary call
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryResponse<M> {
    pub message: Option<M>,
    pub trailers: Trailers,
}

/// Wrap one message in a data frame
#[track_caller]
pub fn encode_message<M: Message>(message: &M) -> ProtoResult<Bytes> {
    let payload = message.encode_to_vec();
    encode_frame(DATA_FLAG, &payload)
}

/// Wrap a trailer block in a trailer frame
#[track_caller]
pub fn encode_trailers(trailers: &Trailers) -> ProtoResult<Bytes> {
    encode_frame(TRAILER_FLAG, &trailers.to_block())
}

#[track_caller]
fn encode_frame(flag: u8, payload: &[u8]) -> ProtoResult<Bytes> {
    let len = u32::try_from(payload.len()).map_err(|_| ProtoError::FrameTooLarge {
        len: payload.len(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let mut frame = BytesMut::with_capacity(FRAME_HEADER_LEN + payload.len());
    frame.put_u8(flag);
    frame.put_u32(len);
    frame.put_slice(payload);
    Ok(frame.freeze())
}

/// Split a response body into frames
#[track_caller]
pub fn decode_frames(mut body: Bytes) -> ProtoResult<Vec<Frame>> {
    let mut frames = Vec::new();

    while body.has_remaining() {
        if body.remaining() < FRAME_HEADER_LEN {
            return Err(ProtoError::TruncatedFrame {
                message: format!("{} header bytes, need {}", body.remaining(), FRAME_HEADER_LEN),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let flag = body.get_u8();
        let len = body.get_u32() as usize;

        if body.remaining() < len {
            return Err(ProtoError::TruncatedFrame {
                message: format!("payload has {} bytes, header says {}", body.remaining(), len),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let payload = body.split_to(len);

        match flag {
            DATA_FLAG => frames.push(Frame::Data(payload)),
            f if f & TRAILER_FLAG != 0 => frames.push(Frame::Trailers(Trailers::parse(&payload))),
            other => {
                return Err(ProtoError::UnsupportedFlag {
                    flag: other,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }
    }

    Ok(frames)
}

/// Decode a unary response: the first data frame plus merged trailers
#[track_caller]
pub fn decode_unary<M: Message + Default>(body: Bytes) -> ProtoResult<UnaryResponse<M>> {
    let mut message = None;
    let mut trailers = Trailers::default();

    for frame in decode_frames(body)? {
        match frame {
            Frame::Data(payload) if message.is_none() => {
                let decoded = M::decode(payload).map_err(|e| ProtoError::Decode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                })?;
                message = Some(decoded);
            }
            Frame::Data(_) => {}
            Frame::Trailers(block) => trailers.entries.extend(block.entries),
        }
    }

    Ok(UnaryResponse { message, trailers })
}
