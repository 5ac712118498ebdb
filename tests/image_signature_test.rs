use academy_md::images::ImageKind;

#[test]
fn png_signature_classifies_as_png() {
    let bytes = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR";
    assert_eq!(ImageKind::detect(bytes), ImageKind::Png);
    assert_eq!(ImageKind::detect(bytes).extension(), ".png");
}

#[test]
fn jpeg_signature_classifies_as_jpeg() {
    let bytes = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];
    assert_eq!(ImageKind::detect(&bytes), ImageKind::Jpeg);
    assert_eq!(ImageKind::detect(&bytes).extension(), ".jpg");
}

#[test]
fn both_gif_signatures_classify_as_gif() {
    assert_eq!(ImageKind::detect(b"GIF87a\x10\x00"), ImageKind::Gif);
    assert_eq!(ImageKind::detect(b"GIF89a\x10\x00"), ImageKind::Gif);
    assert_eq!(ImageKind::detect(b"GIF89a").extension(), ".gif");
}

#[test]
fn unknown_bytes_classify_as_other() {
    assert_eq!(ImageKind::detect(b"<svg xmlns="), ImageKind::Other);
    assert_eq!(ImageKind::detect(b"plain text"), ImageKind::Other);
    assert_eq!(ImageKind::detect(b""), ImageKind::Other);
    assert_eq!(ImageKind::detect(b"").extension(), "");
}

#[test]
fn truncated_magic_is_not_misclassified() {
    // A lone 0x89 or "GIF" prefix is not enough to claim a format.
    assert_eq!(ImageKind::detect(b"\x89PNG"), ImageKind::Other);
    assert_eq!(ImageKind::detect(b"GIF"), ImageKind::Other);
    // JPEG needs only its two-byte marker.
    assert_eq!(ImageKind::detect(&[0xFF, 0xD8]), ImageKind::Jpeg);
}
