use glam::{DAffine2, DVec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Inclusive-exclusive pixel bounds, already clipped to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PixelBounds {
    pub(crate) left: u32,
    pub(crate) top: u32,
    pub(crate) right: u32,
    pub(crate) bottom: u32,
}

/// Screen-space bounding box of a `width x height` quad pushed through
/// `transform`, clipped to `viewport`. `None` when nothing is visible or the
/// transform is degenerate.
pub(crate) fn clipped_bounds(
    transform: DAffine2,
    width: u32,
    height: u32,
    viewport: Viewport,
) -> Option<PixelBounds> {
    if !transform.is_finite() {
        return None;
    }
    let corners = [
        DVec2::new(0.0, 0.0),
        DVec2::new(width as f64, 0.0),
        DVec2::new(0.0, height as f64),
        DVec2::new(width as f64, height as f64),
    ]
    .map(|corner| transform.transform_point2(corner));

    let min = corners
        .iter()
        .fold(DVec2::splat(f64::INFINITY), |acc, p| acc.min(*p));
    let max = corners
        .iter()
        .fold(DVec2::splat(f64::NEG_INFINITY), |acc, p| acc.max(*p));

    let left = min.x.floor().max(0.0);
    let top = min.y.floor().max(0.0);
    let right = max.x.ceil().min(viewport.width as f64);
    let bottom = max.y.ceil().min(viewport.height as f64);
    if left >= right || top >= bottom {
        return None;
    }

    Some(PixelBounds {
        left: left as u32,
        top: top as u32,
        right: right as u32,
        bottom: bottom as u32,
    })
}

/// Maps the center of destination pixel `(x, y)` back into source space.
pub(crate) fn source_point_for_pixel(inverse: DAffine2, x: u32, y: u32) -> DVec2 {
    inverse.transform_point2(DVec2::new(x as f64 + 0.5, y as f64 + 0.5))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 640,
        height: 480,
    };

    #[test]
    fn identity_bounds_match_quad_size() {
        let bounds = clipped_bounds(DAffine2::IDENTITY, 32, 16, VIEWPORT).expect("bounds");
        assert_eq!(
            bounds,
            PixelBounds {
                left: 0,
                top: 0,
                right: 32,
                bottom: 16
            }
        );
    }

    #[test]
    fn scaled_and_translated_bounds() {
        let transform = DAffine2::from_translation(DVec2::new(100.0, 200.0))
            * DAffine2::from_scale(DVec2::splat(2.0));
        let bounds = clipped_bounds(transform, 32, 32, VIEWPORT).expect("bounds");
        assert_eq!((bounds.left, bounds.top), (100, 200));
        assert_eq!((bounds.right, bounds.bottom), (164, 264));
    }

    #[test]
    fn mirrored_bounds_are_normalized() {
        let transform = DAffine2::from_translation(DVec2::new(100.0, 0.0))
            * DAffine2::from_scale(DVec2::new(-1.0, 1.0));
        let bounds = clipped_bounds(transform, 32, 32, VIEWPORT).expect("bounds");
        assert_eq!((bounds.left, bounds.right), (68, 100));
    }

    #[test]
    fn offscreen_quad_has_no_bounds() {
        let transform = DAffine2::from_translation(DVec2::new(700.0, 10.0));
        assert!(clipped_bounds(transform, 32, 32, VIEWPORT).is_none());

        let transform = DAffine2::from_translation(DVec2::new(-40.0, 10.0));
        assert!(clipped_bounds(transform, 32, 32, VIEWPORT).is_none());
    }

    #[test]
    fn partially_visible_quad_is_clipped() {
        let transform = DAffine2::from_translation(DVec2::new(-16.0, 470.0));
        let bounds = clipped_bounds(transform, 32, 32, VIEWPORT).expect("bounds");
        assert_eq!((bounds.left, bounds.top), (0, 470));
        assert_eq!((bounds.right, bounds.bottom), (16, 480));
    }

    #[test]
    fn pixel_center_maps_through_inverse() {
        let transform = DAffine2::from_scale(DVec2::splat(2.0));
        let point = source_point_for_pixel(transform.inverse(), 3, 5);
        assert!((point.x - 1.75).abs() < 1e-9);
        assert!((point.y - 2.75).abs() < 1e-9);
    }
}
