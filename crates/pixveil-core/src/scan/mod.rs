//! The force-decode engine: marker-agnostic, exhaustive extraction over every
//! channel and byte-framing combination, scored by printable-character ratio.
//!
//! Unlike the single-configuration codec this path never fails on a
//! well-formed image. An image without hidden data simply produces
//! low-scoring candidates; deciding what is worth looking at is left to the
//! caller, usually via [`rank`].

mod score;

pub use score::printable_ratio;

use enum_dispatch::enum_dispatch;
use image::RgbaImage;
use log::debug;

use std::fmt;

use crate::config::Channel;
use crate::traversal::TraversalMode;

/// The scanner always walks the carrier in plain row-major order. Blind
/// recovery across all ten traversals would multiply the search space tenfold
/// and has not been needed in practice.
const SCAN_TRAVERSAL: TraversalMode = TraversalMode::TopBottomLeftRight;

/// assembles a raw LSB bitstream into bytes under one framing assumption
#[enum_dispatch]
pub trait ByteFramer {
    /// Groups bits into bytes; a trailing group of fewer than 8 bits is
    /// discarded.
    fn frame(&self, bits: &[u8]) -> Vec<u8>;
}

/// bytes were written most significant bit first, as the embedding convention does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsbFirst;

impl ByteFramer for MsbFirst {
    fn frame(&self, bits: &[u8]) -> Vec<u8> {
        bits.chunks_exact(8)
            .map(|chunk| chunk.iter().fold(0u8, |byte, bit| (byte << 1) | bit))
            .collect()
    }
}

/// bytes were written least significant bit first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LsbFirst;

impl ByteFramer for LsbFirst {
    fn frame(&self, bits: &[u8]) -> Vec<u8> {
        bits.chunks_exact(8)
            .map(|chunk| chunk.iter().rev().fold(0u8, |byte, bit| (byte << 1) | bit))
            .collect()
    }
}

/// the embedder stored inverted bits, most significant first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvertedMsbFirst;

impl ByteFramer for InvertedMsbFirst {
    fn frame(&self, bits: &[u8]) -> Vec<u8> {
        bits.chunks_exact(8)
            .map(|chunk| chunk.iter().fold(0u8, |byte, bit| (byte << 1) | (bit ^ 1)))
            .collect()
    }
}

/// the embedder stored inverted bits, least significant first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvertedLsbFirst;

impl ByteFramer for InvertedLsbFirst {
    fn frame(&self, bits: &[u8]) -> Vec<u8> {
        bits.chunks_exact(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .rev()
                    .fold(0u8, |byte, bit| (byte << 1) | (bit ^ 1))
            })
            .collect()
    }
}

/// One framing interpretation of a channel's LSB stream. The force decoder
/// tries every technique against every channel; none of them requires a
/// marker or any knowledge of how the image was produced.
#[enum_dispatch(ByteFramer)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Technique {
    MsbFirst,
    LsbFirst,
    InvertedMsbFirst,
    InvertedLsbFirst,
}

impl Technique {
    /// all techniques, in the order the scanner tries them
    pub const fn all() -> [Technique; 4] {
        [
            Technique::MsbFirst(MsbFirst),
            Technique::LsbFirst(LsbFirst),
            Technique::InvertedMsbFirst(InvertedMsbFirst),
            Technique::InvertedLsbFirst(InvertedLsbFirst),
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Technique::MsbFirst(_) => "msb-first",
            Technique::LsbFirst(_) => "lsb-first",
            Technique::InvertedMsbFirst(_) => "inverted-msb-first",
            Technique::InvertedLsbFirst(_) => "inverted-lsb-first",
        }
    }
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one channel/technique extraction attempt. Created once per
/// combination per scan and handed to the caller as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedCandidate {
    pub channel: Channel,
    pub technique: Technique,
    /// every decoded byte, zero and non-printable bytes included
    pub bytes: Vec<u8>,
    /// the underlying bitstream as `'0'`/`'1'` characters
    pub bits: String,
    pub total_bits: usize,
    pub total_chars: usize,
    /// fraction of printable ASCII bytes, the ranking signal
    pub printable_ratio: f64,
}

impl DecodedCandidate {
    /// the decoded bytes rendered as text, non-printable bytes replaced by `.`
    pub fn preview(&self, limit: usize) -> String {
        self.bytes
            .iter()
            .take(limit)
            .map(|&b| if score::is_printable(b) { b as char } else { '.' })
            .collect()
    }
}

/// Which combinations a scan tries. The defaults cover every channel and
/// every known technique; tests inject narrower sets.
#[derive(Debug, Clone)]
pub struct ForceDecodeOptions {
    pub channels: Vec<Channel>,
    pub techniques: Vec<Technique>,
}

impl Default for ForceDecodeOptions {
    fn default() -> Self {
        Self {
            channels: Channel::ALL.to_vec(),
            techniques: Technique::all().to_vec(),
        }
    }
}

/// Exhaustive blind extraction over the channel/technique matrix.
#[derive(Debug, Default)]
pub struct ForceDecoder {
    options: ForceDecodeOptions,
}

impl ForceDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ForceDecodeOptions) -> Self {
        Self { options }
    }

    /// Runs every configured combination against the image and returns one
    /// candidate per combination, in enumeration order.
    ///
    /// Scanning never fails: a malformed (zero-size) buffer yields an empty
    /// list, an innocent image yields low-scoring candidates.
    pub fn scan(&self, image: &RgbaImage) -> Vec<DecodedCandidate> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let coords = SCAN_TRAVERSAL.coordinates(width, height);
        let mut candidates =
            Vec::with_capacity(self.options.channels.len() * self.options.techniques.len());

        for &channel in &self.options.channels {
            let bits: Vec<u8> = coords
                .iter()
                .map(|&(x, y)| image.get_pixel(x, y).0[channel.offset()] & 1)
                .collect();

            for &technique in &self.options.techniques {
                let bytes = technique.frame(&bits);
                let printable_ratio = printable_ratio(&bytes);
                debug!(
                    "scanned {channel}/{technique}: {} bits, {} chars, ratio {printable_ratio:.3}",
                    bits.len(),
                    bytes.len()
                );

                candidates.push(DecodedCandidate {
                    channel,
                    technique,
                    bits: bits.iter().map(|bit| char::from(b'0' + bit)).collect(),
                    total_bits: bits.len(),
                    total_chars: bytes.len(),
                    printable_ratio,
                    bytes,
                });
            }
        }

        candidates
    }
}

/// Sorts candidates by descending printable ratio, the order a human wants to
/// inspect them in. Ties keep their enumeration order.
pub fn rank(mut candidates: Vec<DecodedCandidate>) -> Vec<DecodedCandidate> {
    candidates.sort_by(|a, b| b.printable_ratio.total_cmp(&a.printable_ratio));
    candidates
}
