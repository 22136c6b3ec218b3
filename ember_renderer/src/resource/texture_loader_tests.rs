use super::*;

// ============
// Format selection
// ============

#[test]
fn test_format_for_channels() {
    assert_eq!(format_for_channels(1), (DataFormat::R8, DataFormat::R));
    assert_eq!(format_for_channels(2), (DataFormat::Rg8, DataFormat::Rg));
    assert_eq!(format_for_channels(3), (DataFormat::Rgb8, DataFormat::Rgb));
    assert_eq!(format_for_channels(4), (DataFormat::Rgba8, DataFormat::Rgba));
}

#[test]
fn test_oversized_channel_count_clamps_to_rgba() {
    assert_eq!(format_for_channels(5), (DataFormat::Rgba8, DataFormat::Rgba));
    assert_eq!(format_for_channels(0), (DataFormat::Rgba8, DataFormat::Rgba));
}

// ============
// Mip chain length
// ============

#[test]
fn test_mip_levels_power_of_two() {
    assert_eq!(mip_levels(1, 1), 1);
    assert_eq!(mip_levels(2, 2), 2);
    assert_eq!(mip_levels(256, 256), 9);
    assert_eq!(mip_levels(1024, 512), 11);
}

#[test]
fn test_mip_levels_non_power_of_two() {
    assert_eq!(mip_levels(3, 3), 2);
    assert_eq!(mip_levels(640, 480), 10);
}

// ============
// Decode failure
// ============

#[test]
fn test_garbage_bytes_fail_to_decode() {
    // Decoding happens before any GPU work, so the error path needs no context
    let result = texture2d_from_bytes(&[0x00, 0x01, 0x02, 0x03]);
    assert!(matches!(result, Err(crate::Error::Image(_))));
}

#[test]
fn test_missing_file_reports_path() {
    let result = texture2d_from_file("no/such/texture.png");
    match result {
        Err(crate::Error::Io(msg)) => assert!(msg.contains("no/such/texture.png")),
        _ => panic!("expected Io error"),
    }
}
