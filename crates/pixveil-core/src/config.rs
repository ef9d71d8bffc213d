use std::fmt;
use std::str::FromStr;

use crate::error::PixveilError;
use crate::result::Result;
use crate::traversal::TraversalMode;

/// the end-of-message token appended to every payload during encoding
pub const DEFAULT_MARKER: &[u8] = b"##END##";

/// A single color channel of an RGBA pixel usable as an embedding target.
///
/// Alpha is deliberately absent: flipping alpha LSBs is far more visible than
/// color noise and many renderers premultiply it away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// all channels, in the fixed enumeration order used during bit packing
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// byte offset of this channel within an RGBA pixel
    pub fn offset(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order-insensitive selection of color channels.
///
/// No matter how the set was built, iteration always yields channels in
/// R, G, B order so that encode and decode walk the same slot sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelSet {
    mask: [bool; 3],
}

impl ChannelSet {
    /// builds a set from the given channels, rejecting an empty selection
    pub fn new(channels: &[Channel]) -> Result<Self> {
        if channels.is_empty() {
            return Err(PixveilError::EmptyChannelSet);
        }

        let mut mask = [false; 3];
        for c in channels {
            mask[c.offset()] = true;
        }

        Ok(Self { mask })
    }

    /// the full R, G, B selection
    pub fn all() -> Self {
        Self {
            mask: [true, true, true],
        }
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.mask[channel.offset()]
    }

    pub fn len(&self) -> usize {
        self.mask.iter().filter(|selected| **selected).count()
    }

    pub fn is_empty(&self) -> bool {
        self.mask.iter().all(|selected| !selected)
    }

    /// iterates the selected channels in the fixed R, G, B order
    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        Channel::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for ChannelSet {
    type Err = PixveilError;

    /// parses selections like `rgb`, `rg` or `B`; order and repetition are irrelevant
    fn from_str(s: &str) -> Result<Self> {
        let mut channels = Vec::with_capacity(3);
        for letter in s.chars() {
            match letter.to_ascii_lowercase() {
                'r' => channels.push(Channel::Red),
                'g' => channels.push(Channel::Green),
                'b' => channels.push(Channel::Blue),
                other => return Err(PixveilError::UnknownChannel(other)),
            }
        }

        Self::new(&channels)
    }
}

impl fmt::Display for ChannelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for channel in self.iter() {
            f.write_str(&channel.as_str()[..1])?;
        }
        Ok(())
    }
}

/// The configuration of a single encode or decode pass: which channels carry
/// bits, in which order pixels are visited, and which marker ends the message.
#[derive(Debug, Clone)]
pub struct StegoConfig {
    channels: ChannelSet,
    traversal: TraversalMode,
    marker: Vec<u8>,
}

impl Default for StegoConfig {
    /// all three color channels, a plain row scan and the stock marker
    fn default() -> Self {
        Self {
            channels: ChannelSet::all(),
            traversal: TraversalMode::TopBottomLeftRight,
            marker: DEFAULT_MARKER.to_vec(),
        }
    }
}

impl StegoConfig {
    pub fn new(
        channels: ChannelSet,
        traversal: TraversalMode,
        marker: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            channels,
            traversal,
            marker: marker.into(),
        }
    }

    pub fn with_channels(mut self, channels: ChannelSet) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_traversal(mut self, traversal: TraversalMode) -> Self {
        self.traversal = traversal;
        self
    }

    pub fn with_marker(mut self, marker: impl Into<Vec<u8>>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn channels(&self) -> ChannelSet {
        self.channels
    }

    pub fn traversal(&self) -> TraversalMode {
        self.traversal
    }

    pub fn marker(&self) -> &[u8] {
        &self.marker
    }

    /// Checked before any pixel access: a config with nothing to write to or
    /// no way to detect the end of a message is rejected as a whole.
    pub fn validate(&self) -> Result<()> {
        if self.channels.is_empty() {
            return Err(PixveilError::EmptyChannelSet);
        }
        if self.marker.is_empty() {
            return Err(PixveilError::EmptyMarker);
        }

        Ok(())
    }

    /// number of payload bits a carrier of the given dimensions holds under this configuration
    pub fn capacity_bits(&self, width: u32, height: u32) -> usize {
        (width as usize) * (height as usize) * self.channels.len()
    }

    /// largest message (in bytes) that still fits next to the marker
    pub fn max_message_len(&self, width: u32, height: u32) -> usize {
        (self.capacity_bits(width, height) / 8).saturating_sub(self.marker.len())
    }
}
