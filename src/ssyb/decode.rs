use super::consts::*;
use crate::RecordingDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("file header too short ({0} bytes)")]
    HeaderTooShort(usize),
    #[error("unexpected subcode packet ids: {0:02x?}")]
    PacketIdMismatch([u8; 3]),
}

/// Decodes the recording date and time of the first frame from the header
/// bytes of a raw DV file.
///
/// `header` must hold the file's first bytes, up to [HEADER_LEN] of them.
/// A buffer cut short of the subcode packets yields
/// [DecodeError::HeaderTooShort]; a header whose packet ids are not
/// `'a'`/`'b'`/`'c'` at their fixed offsets yields
/// [DecodeError::PacketIdMismatch]. The latter is the ordinary outcome for
/// any file that is not PAL-layout DV, including files whose first frame is
/// corrupted.
pub fn decode_header(header: &[u8]) -> Result<RecordingDateTime, DecodeError> {
    if header.len() < MIN_HEADER_LEN {
        return Err(DecodeError::HeaderTooShort(header.len()));
    }

    let ids = [
        header[PACKET_A_OFFSET],
        header[PACKET_B_OFFSET],
        header[PACKET_C_OFFSET],
    ];
    if ids != [PACKET_A_ID, PACKET_B_ID, PACKET_C_ID] {
        return Err(DecodeError::PacketIdMismatch(ids));
    }

    let day = unpack_bcd(header[DAY_OFFSET], 0x3);
    let month = unpack_bcd(header[MONTH_OFFSET], 0x1);
    let year = expand_year(unpack_bcd(header[YEAR_OFFSET], 0xf));
    let second = unpack_bcd(header[SECOND_OFFSET], 0x7);
    let minute = unpack_bcd(header[MINUTE_OFFSET], 0x7);
    let hour = unpack_bcd(header[HOUR_OFFSET], 0x3);

    Ok(RecordingDateTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
    })
}

// The ones digit sits in the low nibble; the tens digit shares the high
// nibble with flag bits, so each field masks the tens nibble down to the
// bits its value range needs.
fn unpack_bcd(byte: u8, tens_mask: u8) -> u8 {
    (byte & 0xf) + 10 * ((byte >> 4) & tens_mask)
}

fn expand_year(year: u8) -> u16 {
    if year < CENTURY_PIVOT {
        2000 + u16::from(year)
    } else {
        1900 + u16::from(year)
    }
}
