use image::{ImageBuffer, RgbaImage};

use pixveil_core::{
    Channel, ChannelSet, LsbCodec, PixveilError, StegoConfig, TraversalMode,
};

fn gradient_image(width: u32, height: u32) -> RgbaImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        let i = (x * 7 + y * 13) as u8;
        image::Rgba([i, i.wrapping_add(1), i.wrapping_add(2), 255])
    })
}

fn channel_subsets() -> Vec<ChannelSet> {
    [
        &[Channel::Red][..],
        &[Channel::Green][..],
        &[Channel::Blue][..],
        &[Channel::Red, Channel::Green][..],
        &[Channel::Red, Channel::Blue][..],
        &[Channel::Green, Channel::Blue][..],
        &[Channel::Red, Channel::Green, Channel::Blue][..],
    ]
    .iter()
    .map(|channels| ChannelSet::new(channels).unwrap())
    .collect()
}

#[test]
fn roundtrip_law_holds_for_every_traversal_and_channel_subset() {
    let carrier = gradient_image(16, 16);
    let message = b"The quick brown fox";

    for traversal in TraversalMode::ALL {
        for channels in channel_subsets() {
            let config = StegoConfig::default()
                .with_channels(channels)
                .with_traversal(traversal);

            let stego = LsbCodec::encode(&carrier, message, &config)
                .unwrap_or_else(|e| panic!("encode failed for {traversal}: {e}"));
            let recovered = LsbCodec::decode(&stego, &config)
                .unwrap_or_else(|e| panic!("decode failed for {traversal}: {e}"));

            assert_eq!(
                recovered, message,
                "roundtrip mismatch for {traversal} with channels {channels}"
            );
        }
    }
}

#[test]
fn roundtrip_survives_binary_messages_with_zero_bytes() {
    let carrier = gradient_image(16, 16);
    let message = [0x00, 0xFF, 0x7F, 0x00, 0x01, 0x80];
    let config = StegoConfig::default();

    let stego = LsbCodec::encode(&carrier, &message, &config).unwrap();
    assert_eq!(LsbCodec::decode(&stego, &config).unwrap(), message);
}

#[test]
fn a_message_filling_the_capacity_exactly_still_roundtrips() {
    // 8x8 pixels, one channel: 64 bits = 8 bytes; 1 message byte + 7 marker bytes
    let carrier = gradient_image(8, 8);
    let config = StegoConfig::default().with_channels(ChannelSet::new(&[Channel::Blue]).unwrap());

    let stego = LsbCodec::encode(&carrier, b"X", &config).unwrap();
    assert_eq!(LsbCodec::decode(&stego, &config).unwrap(), b"X");
}

#[test]
fn one_byte_over_capacity_fails_with_the_byte_capacity_as_hint() {
    let carrier = gradient_image(8, 8);
    let config = StegoConfig::default().with_channels(ChannelSet::new(&[Channel::Blue]).unwrap());

    match LsbCodec::encode(&carrier, b"XY", &config) {
        Err(PixveilError::CapacityExceeded { max_chars }) => assert_eq!(max_chars, 8),
        other => panic!("expected CapacityExceeded, got {other:?}"),
    }
}

// a 2x2 image holds 4 pixels x 3 channels = 12 bits, not even two bytes
#[test]
fn a_tiny_image_reports_a_single_character_of_capacity() {
    let carrier = gradient_image(2, 2);

    match LsbCodec::encode(&carrier, b"A", &StegoConfig::default()) {
        Err(PixveilError::CapacityExceeded { max_chars }) => assert_eq!(max_chars, 1),
        other => panic!("expected CapacityExceeded, got {other:?}"),
    }
}

#[test]
fn hello_roundtrips_and_a_wrong_channel_config_finds_no_marker() {
    let carrier = RgbaImage::new(8, 8);
    let config = StegoConfig::default()
        .with_traversal(TraversalMode::TopBottomLeftRight)
        .with_marker(&b"##END##"[..]);

    let stego = LsbCodec::encode(&carrier, b"HELLO", &config).unwrap();
    assert_eq!(LsbCodec::decode(&stego, &config).unwrap(), b"HELLO");

    // reading only the red channel misaligns every byte after the first bit
    let wrong = config.clone().with_channels(ChannelSet::new(&[Channel::Red]).unwrap());
    assert!(matches!(
        LsbCodec::decode(&stego, &wrong),
        Err(PixveilError::MarkerNotFound)
    ));
}

#[test]
fn decoding_an_untouched_image_finds_no_marker() {
    for image in [gradient_image(8, 8), RgbaImage::new(8, 8)] {
        assert!(matches!(
            LsbCodec::decode(&image, &StegoConfig::default()),
            Err(PixveilError::MarkerNotFound)
        ));
    }
}

#[test]
fn markers_are_caller_defined_and_stripped_from_the_result() {
    let carrier = gradient_image(16, 16);
    let config = StegoConfig::default().with_marker(&b"\x00\x01stop"[..]);

    let stego = LsbCodec::encode(&carrier, b"payload", &config).unwrap();
    let recovered = LsbCodec::decode(&stego, &config).unwrap();
    assert_eq!(recovered, b"payload");
}

#[test]
fn decoding_with_a_different_traversal_than_encoded_fails() {
    let carrier = gradient_image(16, 16);
    let encode_config = StegoConfig::default().with_traversal(TraversalMode::SpiralClockwise);
    let decode_config = StegoConfig::default().with_traversal(TraversalMode::DiagonalTopLeft);

    let stego = LsbCodec::encode(&carrier, b"direction matters", &encode_config).unwrap();
    assert!(matches!(
        LsbCodec::decode(&stego, &decode_config),
        Err(PixveilError::MarkerNotFound)
    ));
}
