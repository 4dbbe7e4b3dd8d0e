pub const HEADER_LEN: usize = 512;

// The DV file header includes three 5-byte SSYB subcode packets; the first
// byte of each packet is its id. These offsets hold for PAL DV as written
// by tape import. A conforming alternative would scan for the packets by
// id instead of assuming their position.
pub const PACKET_A_OFFSET: usize = 0x1c5;
pub const PACKET_B_OFFSET: usize = 0x1ca;
pub const PACKET_C_OFFSET: usize = 0x1cf;

pub const PACKET_A_ID: u8 = b'a';
pub const PACKET_B_ID: u8 = b'b';
pub const PACKET_C_ID: u8 = b'c';

// Packet 'b' carries the recording date, packet 'c' the recording time.
pub const DAY_OFFSET: usize = PACKET_B_OFFSET + 2;
pub const MONTH_OFFSET: usize = PACKET_B_OFFSET + 3;
pub const YEAR_OFFSET: usize = PACKET_B_OFFSET + 4;

pub const SECOND_OFFSET: usize = PACKET_C_OFFSET + 2;
pub const MINUTE_OFFSET: usize = PACKET_C_OFFSET + 3;
pub const HOUR_OFFSET: usize = PACKET_C_OFFSET + 4;

pub const MIN_HEADER_LEN: usize = HOUR_OFFSET + 1;

// Two-digit years below this are 2000s, the rest 1900s.
pub const CENTURY_PIVOT: u8 = 25;
