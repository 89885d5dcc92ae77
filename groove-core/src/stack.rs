//! Card stack transforms and render-range culling
//!
//! Pure derived values for the stack renderer: which indices need to exist
//! and where each one sits in simulated 3D. Nothing here owns state.

use std::ops::Range;

use serde::Serialize;

use crate::constants::stack as defaults;
use crate::layout::{DeviceClass, LayoutProfile};

/// Presentation constants for the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackConfig {
    pub mobile_render_radius: usize,
    pub render_radius: usize,
    pub mobile_depth_step: f32,
    pub depth_step: f32,
    pub mobile_rotation_step: f32,
    pub rotation_step: f32,
    pub active_scale: f32,
    pub scale_step: f32,
    pub min_scale: f32,
    pub z_order_base: i32,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            mobile_render_radius: defaults::MOBILE_RENDER_RADIUS,
            render_radius: defaults::RENDER_RADIUS,
            mobile_depth_step: defaults::MOBILE_DEPTH_STEP,
            depth_step: defaults::DEPTH_STEP,
            mobile_rotation_step: defaults::MOBILE_ROTATION_STEP,
            rotation_step: defaults::ROTATION_STEP,
            active_scale: defaults::ACTIVE_SCALE,
            scale_step: defaults::SCALE_STEP,
            min_scale: defaults::MIN_SCALE,
            z_order_base: defaults::Z_ORDER_BASE,
        }
    }
}

impl StackConfig {
    /// How many neighbours on each side of the active card are materialized.
    pub fn render_radius(&self, device: DeviceClass) -> usize {
        match device {
            DeviceClass::Mobile => self.mobile_render_radius,
            DeviceClass::Tablet | DeviceClass::Desktop => self.render_radius,
        }
    }
}

/// Where one card sits relative to the active card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardTransform {
    pub index: usize,
    /// Signed distance from the active index.
    pub distance: isize,
    /// Horizontal offset (px).
    pub offset_x: f32,
    /// Depth (px, negative is away from the viewer).
    pub depth_z: f32,
    /// Y-axis rotation (degrees).
    pub rotate_y: f32,
    pub scale: f32,
    pub opacity: f32,
    pub z_order: i32,
    pub is_active: bool,
}

/// Indices that should be rendered around `index`. Empty when `count == 0`.
pub fn render_window(
    index: usize,
    count: usize,
    device: DeviceClass,
    cfg: &StackConfig,
) -> Range<usize> {
    if count == 0 {
        return 0..0;
    }
    let index = index.min(count - 1);
    let radius = cfg.render_radius(device);
    let start = index.saturating_sub(radius);
    let end = index.saturating_add(radius).saturating_add(1).min(count);
    start..end
}

/// Transform for card `card` while `active` is selected, or `None` when the
/// card is outside the render window.
pub fn card_transform(
    card: usize,
    active: usize,
    profile: &LayoutProfile,
    cfg: &StackConfig,
) -> Option<CardTransform> {
    let distance = card as isize - active as isize;
    let steps = distance.unsigned_abs();
    if steps > cfg.render_radius(profile.device_class) {
        return None;
    }

    let mobile = profile.device_class == DeviceClass::Mobile;
    let depth_step = if mobile {
        cfg.mobile_depth_step
    } else {
        cfg.depth_step
    };
    let rotation_step = if mobile {
        cfg.mobile_rotation_step
    } else {
        cfg.rotation_step
    };
    let is_active = distance == 0;
    let scale = if is_active {
        cfg.active_scale
    } else {
        (1.0 - steps as f32 * cfg.scale_step).max(cfg.min_scale)
    };
    let z_order = cfg
        .z_order_base
        .saturating_sub(i32::try_from(steps).unwrap_or(i32::MAX));

    Some(CardTransform {
        index: card,
        distance,
        offset_x: distance as f32 * profile.x_spacing,
        depth_z: if is_active {
            0.0
        } else {
            steps as f32 * depth_step
        },
        rotate_y: distance as f32 * rotation_step,
        scale,
        opacity: 1.0,
        z_order,
        is_active,
    })
}

/// Transforms for every card in the render window, in index order.
pub fn stack_transforms(
    active: usize,
    count: usize,
    profile: &LayoutProfile,
    cfg: &StackConfig,
) -> Vec<CardTransform> {
    render_window(active, count, profile.device_class, cfg)
        .filter_map(|i| card_transform(i, active, profile, cfg))
        .collect()
}
