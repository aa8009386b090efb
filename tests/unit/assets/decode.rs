use super::*;

fn png_bytes(pixels: &[[u8; 4]], width: u32, height: u32) -> Vec<u8> {
    let mut img = image::RgbaImage::new(width, height);
    for (i, px) in pixels.iter().enumerate() {
        let x = (i as u32) % width;
        let y = (i as u32) / width;
        img.put_pixel(x, y, image::Rgba(*px));
    }
    let mut out = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut out),
        image::ImageFormat::Png,
    )
    .unwrap();
    out
}

#[test]
fn decodes_dimensions_and_premultiplies() {
    let bytes = png_bytes(&[[200, 100, 50, 128], [255, 255, 255, 255]], 2, 1);
    let prepared = decode_image(&bytes).unwrap();
    assert_eq!(prepared.width, 2);
    assert_eq!(prepared.height, 1);

    // (c * a + 127) / 255 with a = 128.
    assert_eq!(&prepared.rgba8_premul[0..4], &[100, 50, 25, 128]);
    assert_eq!(&prepared.rgba8_premul[4..8], &[255, 255, 255, 255]);
}

#[test]
fn fully_transparent_pixels_zero_out_color() {
    let bytes = png_bytes(&[[200, 100, 50, 0]], 1, 1);
    let prepared = decode_image(&bytes).unwrap();
    assert_eq!(&prepared.rgba8_premul[0..4], &[0, 0, 0, 0]);
}

#[test]
fn garbage_bytes_are_an_error() {
    assert!(decode_image(b"not an image").is_err());
}
