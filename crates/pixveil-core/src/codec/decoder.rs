use std::io::{self, BufWriter, Read};

use bitstream_io::{BigEndian, BitWrite, BitWriter};
use image::RgbaImage;

use crate::codec::slots::ChannelSlots;
use crate::config::StegoConfig;

/// Reads the carrier's channel LSBs back into whole bytes, most significant
/// bit first.
///
/// Only complete bytes are ever produced: a trailing group of fewer than
/// 8 bits is unreachable through `Read`, which is exactly the discard
/// behavior the raw extraction path relies on.
pub(crate) struct LsbReader<'i> {
    carrier: &'i RgbaImage,
    slots: ChannelSlots,
    cursor: usize,
}

impl<'i> LsbReader<'i> {
    pub fn new(carrier: &'i RgbaImage, config: &StegoConfig) -> Self {
        let (width, height) = carrier.dimensions();
        Self {
            carrier,
            slots: ChannelSlots::new(width, height, config),
            cursor: 0,
        }
    }
}

impl Read for LsbReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining_bits = self.slots.len().saturating_sub(self.cursor);
        let bytes_to_read = buf.len().min(remaining_bits >> 3);
        if bytes_to_read == 0 {
            return Ok(0);
        }

        let buf_writer = BufWriter::new(buf);
        let mut bit_buffer = BitWriter::endian(buf_writer, BigEndian);

        for _ in 0..(bytes_to_read << 3) {
            let Some(((x, y), channel)) = self.slots.get(self.cursor) else {
                break;
            };

            let color = self.carrier.get_pixel(x, y).0[channel.offset()];
            bit_buffer.write_bit(color & 1 == 1)?;
            self.cursor += 1;
        }

        Ok(bytes_to_read)
    }
}
