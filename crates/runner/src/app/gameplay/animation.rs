use engine::{DAffine2, DVec2, SourceRect};

use super::tuning::Tuning;

/// Each frame is held for `frame_hold_ticks` ticks, then the strip wraps.
pub(crate) fn frame_index(tick_count: u64, frame_hold_ticks: u32, frame_count: u32) -> u32 {
    let hold = u64::from(frame_hold_ticks.max(1));
    let count = u64::from(frame_count.max(1));
    // `count` fits in u32, so the remainder does too.
    ((tick_count / hold) % count) as u32
}

pub(crate) fn source_rect(tuning: &Tuning, frame_index: u32) -> SourceRect {
    let x = tuning
        .frame_origin_x
        .saturating_add(frame_index.saturating_mul(tuning.frame_width));
    SourceRect::new(
        x,
        tuning.frame_origin_y,
        tuning.frame_width,
        tuning.frame_height,
    )
}

/// Ticks for an auto-scrolling sprite to cross the screen and fully leave it.
pub(crate) fn wrap_period(screen_width: u32, tuning: &Tuning) -> u64 {
    let sprite_width = f64::from(tuning.frame_width) * tuning.zoom;
    let period = (f64::from(screen_width) + sprite_width).ceil();
    if period.is_finite() && period >= 1.0 {
        period as u64
    } else {
        1
    }
}

/// Composes the frame's placement. Steps are applied in order: center the
/// frame on the origin, zoom, optionally mirror, then move to `anchor`.
pub(crate) fn draw_transform(tuning: &Tuning, mirrored: bool, anchor: DVec2) -> DAffine2 {
    let half_width = f64::from(tuning.frame_width) / 2.0;
    let half_height = f64::from(tuning.frame_height) / 2.0;

    let mut transform = DAffine2::from_translation(DVec2::new(-half_width, -half_height));
    transform = then(transform, DAffine2::from_scale(DVec2::splat(tuning.zoom)));
    if mirrored {
        transform = then(transform, DAffine2::from_scale(DVec2::new(-1.0, 1.0)));
        transform = then(
            transform,
            DAffine2::from_translation(DVec2::new(-half_width, 0.0)),
        );
    }
    then(transform, DAffine2::from_translation(anchor))
}

fn then(current: DAffine2, next: DAffine2) -> DAffine2 {
    next * current
}
