//! Layout resolver: device class and card geometry from viewport size
//!
//! [`resolve_with`] is a pure function of the latest viewport measurement.
//! Hosts call it on every resize and re-render everything that reads the
//! returned [`LayoutProfile`]; the profile has no identity of its own.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::constants::layout as defaults;
use crate::geometry::Viewport;

/// Coarse viewport classification driving spacing and culling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl Display for DeviceClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DeviceClass::Mobile => write!(f, "MOBILE"),
            DeviceClass::Tablet => write!(f, "TABLET"),
            DeviceClass::Desktop => write!(f, "DESKTOP"),
        }
    }
}

/// Width budget for one device class: `clamp(fraction * width, min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBudget {
    pub width_fraction: f32,
    pub min: f32,
    pub max: f32,
}

impl CardBudget {
    fn apply(&self, extent: f32) -> f32 {
        let lo = self.min.min(self.max);
        (extent * self.width_fraction).clamp(lo, self.max.max(lo))
    }
}

/// Breakpoints, chrome bands and card sizing rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub mobile_max_width: f32,
    pub tablet_max_width: f32,
    pub landscape_max_width: f32,
    pub landscape_max_height: f32,
    pub header_band_mobile: f32,
    pub header_band: f32,
    pub footer_band_mobile: f32,
    pub footer_band: f32,
    pub mobile: CardBudget,
    pub tablet: CardBudget,
    pub desktop: CardBudget,
    /// Landscape phones: fraction of viewport height, capped at `max`.
    pub landscape: CardBudget,
    pub stage_height_fraction: f32,
    pub short_viewport_height: f32,
    pub card_floor: f32,
    pub short_card_floor: f32,
    pub mobile_spacing: f32,
    pub landscape_mobile_spacing: f32,
    pub tablet_spacing_ratio: f32,
    pub desktop_spacing_ratio: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_max_width: defaults::MOBILE_MAX_WIDTH,
            tablet_max_width: defaults::TABLET_MAX_WIDTH,
            landscape_max_width: defaults::LANDSCAPE_MOBILE_MAX_WIDTH,
            landscape_max_height: defaults::LANDSCAPE_MOBILE_MAX_HEIGHT,
            header_band_mobile: defaults::HEADER_BAND_MOBILE,
            header_band: defaults::HEADER_BAND,
            footer_band_mobile: defaults::FOOTER_BAND_MOBILE,
            footer_band: defaults::FOOTER_BAND,
            mobile: CardBudget {
                width_fraction: defaults::MOBILE_WIDTH_FRACTION,
                min: defaults::MOBILE_MIN_CARD,
                max: defaults::MOBILE_MAX_CARD,
            },
            tablet: CardBudget {
                width_fraction: defaults::TABLET_WIDTH_FRACTION,
                min: defaults::TABLET_MIN_CARD,
                max: defaults::TABLET_MAX_CARD,
            },
            desktop: CardBudget {
                width_fraction: defaults::DESKTOP_WIDTH_FRACTION,
                min: defaults::DESKTOP_MIN_CARD,
                max: defaults::DESKTOP_MAX_CARD,
            },
            landscape: CardBudget {
                width_fraction: defaults::LANDSCAPE_HEIGHT_FRACTION,
                min: defaults::SHORT_CARD_FLOOR,
                max: defaults::LANDSCAPE_MAX_CARD,
            },
            stage_height_fraction: defaults::STAGE_HEIGHT_FRACTION,
            short_viewport_height: defaults::SHORT_VIEWPORT_HEIGHT,
            card_floor: defaults::CARD_FLOOR,
            short_card_floor: defaults::SHORT_CARD_FLOOR,
            mobile_spacing: defaults::MOBILE_SPACING,
            landscape_mobile_spacing: defaults::LANDSCAPE_MOBILE_SPACING,
            tablet_spacing_ratio: defaults::TABLET_SPACING_RATIO,
            desktop_spacing_ratio: defaults::DESKTOP_SPACING_RATIO,
        }
    }
}

impl LayoutConfig {
    pub fn classify(&self, width: f32) -> DeviceClass {
        if width < self.mobile_max_width {
            DeviceClass::Mobile
        } else if width < self.tablet_max_width {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Derived geometry for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutProfile {
    pub device_class: DeviceClass,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub card_size: f32,
    pub x_spacing: f32,
    pub stage_top: f32,
    pub stage_bottom: f32,
    pub landscape_mobile: bool,
}

impl LayoutProfile {
    /// Usable vertical band between header and footer chrome.
    pub fn stage_height(&self) -> f32 {
        (self.stage_bottom - self.stage_top).max(0.0)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height)
    }
}

/// Resolve with the compiled defaults.
pub fn resolve(viewport_width: f32, viewport_height: f32) -> LayoutProfile {
    resolve_with(&LayoutConfig::default(), viewport_width, viewport_height)
}

/// Resolve a profile for the given viewport. Never fails; degenerate input
/// (zero, negative, NaN) is clamped to a valid minimum profile.
pub fn resolve_with(
    cfg: &LayoutConfig,
    viewport_width: f32,
    viewport_height: f32,
) -> LayoutProfile {
    let Viewport {
        width: w,
        height: h,
    } = Viewport::new(viewport_width, viewport_height).sanitized();

    let device_class = cfg.classify(w);
    let landscape_mobile =
        w < cfg.landscape_max_width && h < cfg.landscape_max_height;

    let (header, footer) = match device_class {
        DeviceClass::Mobile => (cfg.header_band_mobile, cfg.footer_band_mobile),
        _ => (cfg.header_band, cfg.footer_band),
    };
    let stage_top = header.max(0.0).min(h);
    let stage_bottom = (h - footer.max(0.0)).max(stage_top);
    let stage_height = stage_bottom - stage_top;

    let width_budget = match device_class {
        DeviceClass::Mobile if landscape_mobile => cfg.landscape.apply(h),
        DeviceClass::Mobile => cfg.mobile.apply(w),
        DeviceClass::Tablet => cfg.tablet.apply(w),
        DeviceClass::Desktop => cfg.desktop.apply(w),
    };
    let height_budget = stage_height * cfg.stage_height_fraction;
    let floor = if h < cfg.short_viewport_height {
        cfg.short_card_floor
    } else {
        cfg.card_floor
    };
    let card_size = width_budget.min(height_budget).max(floor).max(1.0);

    let x_spacing = match device_class {
        DeviceClass::Mobile if landscape_mobile => cfg.landscape_mobile_spacing,
        DeviceClass::Mobile => cfg.mobile_spacing,
        DeviceClass::Tablet => card_size * cfg.tablet_spacing_ratio,
        DeviceClass::Desktop => card_size * cfg.desktop_spacing_ratio,
    };

    LayoutProfile {
        device_class,
        viewport_width: w,
        viewport_height: h,
        card_size,
        x_spacing: x_spacing.max(0.0),
        stage_top,
        stage_bottom,
        landscape_mobile,
    }
}
