use std::io::{self, Write};

use image::RgbaImage;

use crate::bit_iterator::BitIterator;
use crate::codec::slots::ChannelSlots;
use crate::config::StegoConfig;

/// Spreads written bytes over the carrier's channel slots, one bit per slot,
/// most significant bit first.
///
/// Only the least significant bit of a channel is touched:
/// `color = (color & !1) | bit`. Whole bytes that do not fit into the
/// remaining slots are reported as unwritten, so `write_all` surfaces a
/// `WriteZero` once the carrier is full.
pub(crate) struct LsbWriter<'i> {
    carrier: &'i mut RgbaImage,
    slots: ChannelSlots,
    cursor: usize,
}

impl<'i> LsbWriter<'i> {
    pub fn new(carrier: &'i mut RgbaImage, config: &StegoConfig) -> Self {
        let (width, height) = carrier.dimensions();
        Self {
            slots: ChannelSlots::new(width, height, config),
            carrier,
            cursor: 0,
        }
    }
}

impl Write for LsbWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut bits_written = 0;
        for bit in BitIterator::new(buf) {
            let Some(((x, y), channel)) = self.slots.get(self.cursor) else {
                break;
            };

            let color = &mut self.carrier.get_pixel_mut(x, y).0[channel.offset()];
            *color = (*color & (u8::MAX - 1)) | bit;

            self.cursor += 1;
            bits_written += 1;
        }

        Ok(bits_written >> 3)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
