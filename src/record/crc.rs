/// Running CRC-16 with polynomial `0x1021`, zero initial value and no reflection
/// or final XOR, as validated by the firmware reading the records.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Crc16(u16);

impl Crc16
{
	pub const POLYNOMIAL: u16 = 0x1021;
	
	pub const TABLE: [u16; 256] = {
		let mut table = [0u16; 256];
		let mut pos = 0;
		while pos < 256
		{
			let mut curr = (pos as u16) << 8;
			let mut round = 0;
			while round < 8
			{
				curr = if (curr & 0x8000) != 0 {(curr << 1) ^ Self::POLYNOMIAL} else {curr << 1};
				round += 1;
			}
			table[pos] = curr;
			pos += 1;
		}
		table
	};
	
	pub fn new() -> Self
	{
		Self(0)
	}
	
	pub fn update(&mut self, value: u8)
	{
		self.0 = (self.0 << 8) ^ Self::TABLE[(value ^ (self.0 >> 8) as u8) as usize];
	}
	
	pub fn update_slice(&mut self, value: &[u8])
	{
		value.iter().for_each(|&v| self.update(v));
	}
	
	pub fn get_value(&self) -> u16
	{
		self.0
	}
}

impl Default for Crc16
{
	fn default() -> Self
	{
		Self::new()
	}
}

pub fn checksum(data: &[u8]) -> u16
{
	let mut crc = Crc16::new();
	crc.update_slice(data);
	crc.get_value()
}
