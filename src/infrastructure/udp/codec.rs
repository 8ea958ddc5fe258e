//! Request and reply frames for the two controller functions the commands use.
//!
//! Every frame is 64 bytes: start-of-message, function code, two reserved
//! bytes, the little-endian controller serial number, then function payload.

use crate::domain::device::{Event, Status};
use thiserror::Error;

pub const FRAME_SIZE: usize = 64;

const SOM: u8 = 0x17;
pub const GET_STATUS: u8 = 0x20;
pub const SET_PC_CONTROL: u8 = 0xa0;

const PC_CONTROL_MAGIC: u32 = 0x55aa_aa55;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrameError {
    #[error("expected 64 bytes, got {0}")]
    Length(usize),

    #[error("invalid start of message {0:#04x}")]
    StartOfMessage(u8),

    #[error("expected function {expected:#04x}, got {actual:#04x}")]
    Function { expected: u8, actual: u8 },
}

fn request(function: u8, serial_number: u32) -> [u8; FRAME_SIZE] {
    let mut frame = [0u8; FRAME_SIZE];
    frame[0] = SOM;
    frame[1] = function;
    frame[4..8].copy_from_slice(&serial_number.to_le_bytes());
    frame
}

pub fn get_status_request(serial_number: u32) -> [u8; FRAME_SIZE] {
    request(GET_STATUS, serial_number)
}

pub fn set_pc_control_request(serial_number: u32, enable: bool) -> [u8; FRAME_SIZE] {
    let mut frame = request(SET_PC_CONTROL, serial_number);
    frame[8..12].copy_from_slice(&PC_CONTROL_MAGIC.to_le_bytes());
    frame[12] = u8::from(enable);
    frame
}

/// Validate the reply header and return the serial number it carries
pub fn decode_header(frame: &[u8], function: u8) -> Result<u32, FrameError> {
    if frame.len() != FRAME_SIZE {
        return Err(FrameError::Length(frame.len()));
    }
    if frame[0] != SOM {
        return Err(FrameError::StartOfMessage(frame[0]));
    }
    if frame[1] != function {
        return Err(FrameError::Function { expected: function, actual: frame[1] });
    }

    Ok(u32_at(frame, 4))
}

pub fn decode_status(frame: &[u8]) -> Result<Status, FrameError> {
    let serial_number = decode_header(frame, GET_STATUS)?;

    let index = u32_at(frame, 8);
    let event = (index != 0).then(|| Event {
        index,
        event_type: frame[12],
        granted: frame[13] == 1,
        door: frame[14],
        direction: frame[15],
        card_number: u32_at(frame, 16),
        timestamp: datetime(&frame[20..22], &frame[22..27]),
        reason: frame[27],
    });

    Ok(Status {
        serial_number,
        event,
        doors: flags(&frame[28..32]),
        buttons: flags(&frame[32..36]),
        system_error: frame[36],
        system_datetime: datetime(&[0x20, frame[51]], &[frame[52], frame[53], frame[37], frame[38], frame[39]]),
        sequence_id: u32_at(frame, 40),
        special_info: frame[48],
        relays: frame[49],
        inputs: frame[50],
    })
}

/// Decode a set-pc-control reply into (serial number, accepted)
pub fn decode_set_pc_control(frame: &[u8]) -> Result<(u32, bool), FrameError> {
    let serial_number = decode_header(frame, SET_PC_CONTROL)?;
    Ok((serial_number, frame[8] == 1))
}

fn u32_at(frame: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([frame[offset], frame[offset + 1], frame[offset + 2], frame[offset + 3]])
}

fn flags(bytes: &[u8]) -> [bool; 4] {
    [bytes[0] == 1, bytes[1] == 1, bytes[2] == 1, bytes[3] == 1]
}

fn bcd(byte: u8) -> Option<u8> {
    let (hi, lo) = (byte >> 4, byte & 0x0f);
    (hi <= 9 && lo <= 9).then_some(hi * 10 + lo)
}

/// Format BCD century+year and month, day, hour, minute, second.
/// Unset (all zero) or malformed values decode to `None`.
fn datetime(year: &[u8], rest: &[u8]) -> Option<String> {
    if rest[..3].iter().all(|b| *b == 0) {
        return None;
    }

    let century = bcd(year[0])?;
    let year = bcd(year[1])?;
    let fields = rest.iter().map(|b| bcd(*b)).collect::<Option<Vec<_>>>()?;

    Some(format!(
        "{:02}{:02}-{:02}-{:02} {:02}:{:02}:{:02}",
        century, year, fields[0], fields[1], fields[2], fields[3], fields[4]
    ))
}
