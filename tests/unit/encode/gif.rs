use super::*;
use crate::{color::ramp::ColorRamp, foundation::core::Rgba8};

fn palette() -> Palette {
    Palette::build(
        &ColorRamp::fire(Rgba8::opaque(255, 149, 0)),
        Rgba8::opaque(255, 0, 0),
    )
}

fn frame(fill: u8) -> IndexedFrame {
    IndexedFrame {
        width: 3,
        height: 2,
        indices: vec![0, fill, 255, fill, 0, 1],
    }
}

#[test]
fn frames_carry_delay_disposal_and_transparency() {
    let frames = vec![frame(10), frame(20), frame(30)];
    let mut buf = Vec::new();
    write_gif(&mut buf, &frames, &palette(), Speed::Slow).unwrap();

    let mut opts = gif::DecodeOptions::new();
    opts.set_color_output(gif::ColorOutput::Indexed);
    let mut dec = opts.read_info(buf.as_slice()).unwrap();
    assert_eq!((dec.width(), dec.height()), (3, 2));
    assert_eq!(dec.global_palette().unwrap(), palette().to_rgb_bytes().as_slice());

    let mut seen = 0;
    while let Some(f) = dec.read_next_frame().unwrap() {
        assert_eq!(f.delay, 2);
        assert_eq!(f.dispose, gif::DisposalMethod::Previous);
        assert_eq!(f.transparent, Some(0));
        assert_eq!(&*f.buffer, frames[seen].indices.as_slice());
        seen += 1;
    }
    assert_eq!(seen, 3);
}

#[test]
fn fast_speed_uses_longer_delay() {
    let mut buf = Vec::new();
    write_gif(&mut buf, &[frame(5)], &palette(), Speed::Fast).unwrap();
    let mut opts = gif::DecodeOptions::new();
    opts.set_color_output(gif::ColorOutput::Indexed);
    let mut dec = opts.read_info(buf.as_slice()).unwrap();
    assert_eq!(dec.read_next_frame().unwrap().unwrap().delay, 5);
}

#[test]
fn rejects_empty_and_mismatched_frames() {
    let mut buf = Vec::new();
    assert!(write_gif(&mut buf, &[], &palette(), Speed::Fast).is_err());

    let odd = IndexedFrame {
        width: 2,
        height: 2,
        indices: vec![0; 4],
    };
    let err = write_gif(&mut Vec::new(), &[frame(1), odd], &palette(), Speed::Fast).unwrap_err();
    assert!(err.to_string().contains("encode error:"));
}
