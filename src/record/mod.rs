//! The 8-byte on-flash record holding one NV-parameter.
//!
//! | bytes | content                              |
//! |-------|--------------------------------------|
//! | 0..4  | value, little-endian                 |
//! | 4     | permission, [`PERMISSION`]           |
//! | 5     | attribute, [`ATTRIBUTE`]             |
//! | 6..8  | CRC-16 of the record, little-endian  |
//!
//! The checksum covers the whole record with its own two bytes zeroed.

use thiserror::Error;

use crate::param::Entry;
use crate::record::crc::Crc16;

pub mod crc;

pub const RECORD_LEN: usize = 8;
/// Read-only and valid.
pub const PERMISSION: u8 = 0xFF;
pub const ATTRIBUTE: u8 = 0x80;
/// Erased flash, used to pad images.
pub const FILLER: [u8; RECORD_LEN] = [0xFF; RECORD_LEN];
const PERMISSION_POS: usize = 4;
const ATTRIBUTE_POS: usize = 5;
const CRC_POS: usize = 6;

pub fn encode(entry: &Entry) -> [u8; RECORD_LEN]
{
	encode_value(entry.value)
}

pub fn encode_value(value: u32) -> [u8; RECORD_LEN]
{
	let mut data = [0u8; RECORD_LEN];
	data[..PERMISSION_POS].copy_from_slice(&u32::to_le_bytes(value));
	data[PERMISSION_POS] = PERMISSION;
	data[ATTRIBUTE_POS] = ATTRIBUTE;
	let crc = record_checksum(&data);
	data[CRC_POS..].copy_from_slice(&u16::to_le_bytes(crc));
	data
}

/// Computes the checksum of `data` as if its checksum field were zero.
pub fn record_checksum(data: &[u8; RECORD_LEN]) -> u16
{
	let mut crc = Crc16::new();
	crc.update_slice(&data[..CRC_POS]);
	crc.update_slice(&[0x00, 0x00]);
	crc.get_value()
}

pub fn is_filler(data: &[u8; RECORD_LEN]) -> bool
{
	*data == FILLER
}

pub fn decode(data: &[u8; RECORD_LEN]) -> Result<u32, DecodeError>
{
	if data[PERMISSION_POS] != PERMISSION
	{
		return Err(DecodeError::Permission(data[PERMISSION_POS]));
	}
	if data[ATTRIBUTE_POS] != ATTRIBUTE
	{
		return Err(DecodeError::Attribute(data[ATTRIBUTE_POS]));
	}
	let have = u16::from_le_bytes([data[CRC_POS], data[CRC_POS + 1]]);
	let expect = record_checksum(data);
	if have != expect
	{
		return Err(DecodeError::Checksum{expect, have});
	}
	Ok(u32::from_le_bytes([data[0], data[1], data[2], data[3]]))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum DecodeError
{
	#[error("unexpected permission byte {0:#04X}")]
	Permission(u8),
	#[error("unexpected attribute byte {0:#04X}")]
	Attribute(u8),
	#[error("checksum mismatch (expected {expect:#06X}, got {have:#06X})")]
	Checksum{expect: u16, have: u16},
}
