use crate::config::{Channel, StegoConfig};

/// Maps a linear bit index onto the carrier slot it occupies: the pixel
/// coordinate in traversal order and the channel within that pixel, channels
/// always enumerated in the fixed R, G, B order.
pub(crate) struct ChannelSlots {
    coords: Vec<(u32, u32)>,
    channels: Vec<Channel>,
}

impl ChannelSlots {
    pub fn new(width: u32, height: u32, config: &StegoConfig) -> Self {
        Self {
            coords: config.traversal().coordinates(width, height),
            channels: config.channels().iter().collect(),
        }
    }

    /// total number of embeddable bits in the carrier
    pub fn len(&self) -> usize {
        self.coords.len() * self.channels.len()
    }

    pub fn get(&self, index: usize) -> Option<((u32, u32), Channel)> {
        let coord = *self.coords.get(index / self.channels.len())?;
        let channel = self.channels[index % self.channels.len()];

        Some((coord, channel))
    }
}
