//! Optional overrides for the compiled tuning constants
//!
//! Each section mirrors one `groove_core` config struct with `Option<T>`
//! fields. Unset fields fall back to the constant of the same name, so a
//! config file only needs the values it changes:
//!
//! ```toml
//! [input]
//! wheel_cooldown_ms = 250
//!
//! [turntable]
//! drag_stiffness = 600.0
//! ```

use serde::Deserialize;

use groove_core::constants::{input, layout, stack, turntable};
use groove_core::layout::CardBudget;
use groove_core::{
    InputConfig, LayoutConfig, SpringParams, StackConfig, Tuning,
    TurntableConfig,
};

/// Declares an override section: the struct of `Option` fields plus one
/// accessor per field that falls back to the given default.
macro_rules! override_section {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            $(
                pub fn $field(&self) -> $ty {
                    self.$field.unwrap_or($default)
                }
            )*
        }
    };
}

override_section! {
    /// `[layout]`: breakpoints, chrome bands and card sizing.
    LayoutOverrides {
        mobile_max_width: f32 = layout::MOBILE_MAX_WIDTH,
        tablet_max_width: f32 = layout::TABLET_MAX_WIDTH,
        landscape_max_width: f32 = layout::LANDSCAPE_MOBILE_MAX_WIDTH,
        landscape_max_height: f32 = layout::LANDSCAPE_MOBILE_MAX_HEIGHT,
        header_band_mobile: f32 = layout::HEADER_BAND_MOBILE,
        header_band: f32 = layout::HEADER_BAND,
        footer_band_mobile: f32 = layout::FOOTER_BAND_MOBILE,
        footer_band: f32 = layout::FOOTER_BAND,
        mobile_width_fraction: f32 = layout::MOBILE_WIDTH_FRACTION,
        mobile_min_card: f32 = layout::MOBILE_MIN_CARD,
        mobile_max_card: f32 = layout::MOBILE_MAX_CARD,
        tablet_width_fraction: f32 = layout::TABLET_WIDTH_FRACTION,
        tablet_min_card: f32 = layout::TABLET_MIN_CARD,
        tablet_max_card: f32 = layout::TABLET_MAX_CARD,
        desktop_width_fraction: f32 = layout::DESKTOP_WIDTH_FRACTION,
        desktop_min_card: f32 = layout::DESKTOP_MIN_CARD,
        desktop_max_card: f32 = layout::DESKTOP_MAX_CARD,
        /// Landscape phones size cards from viewport height.
        landscape_height_fraction: f32 = layout::LANDSCAPE_HEIGHT_FRACTION,
        landscape_max_card: f32 = layout::LANDSCAPE_MAX_CARD,
        stage_height_fraction: f32 = layout::STAGE_HEIGHT_FRACTION,
        short_viewport_height: f32 = layout::SHORT_VIEWPORT_HEIGHT,
        card_floor: f32 = layout::CARD_FLOOR,
        short_card_floor: f32 = layout::SHORT_CARD_FLOOR,
        mobile_spacing: f32 = layout::MOBILE_SPACING,
        landscape_mobile_spacing: f32 = layout::LANDSCAPE_MOBILE_SPACING,
        tablet_spacing_ratio: f32 = layout::TABLET_SPACING_RATIO,
        desktop_spacing_ratio: f32 = layout::DESKTOP_SPACING_RATIO,
    }
}

override_section! {
    /// `[input]`: wheel, swipe and drag thresholds.
    InputOverrides {
        wheel_min_delta: f32 = input::WHEEL_MIN_DELTA,
        wheel_cooldown_ms: u64 = input::WHEEL_COOLDOWN_MS,
        swipe_threshold: f32 = input::SWIPE_THRESHOLD,
        drag_threshold: f32 = input::DRAG_THRESHOLD,
        drag_deadzone: f32 = input::DRAG_DEADZONE,
        elastic_limit_factor: f32 = input::ELASTIC_LIMIT_FACTOR,
    }
}

override_section! {
    /// `[stack]`: culling radius and per-card transforms.
    StackOverrides {
        mobile_render_radius: usize = stack::MOBILE_RENDER_RADIUS,
        render_radius: usize = stack::RENDER_RADIUS,
        mobile_depth_step: f32 = stack::MOBILE_DEPTH_STEP,
        depth_step: f32 = stack::DEPTH_STEP,
        mobile_rotation_step: f32 = stack::MOBILE_ROTATION_STEP,
        rotation_step: f32 = stack::ROTATION_STEP,
        active_scale: f32 = stack::ACTIVE_SCALE,
        scale_step: f32 = stack::SCALE_STEP,
        min_scale: f32 = stack::MIN_SCALE,
        z_order_base: i32 = stack::Z_ORDER_BASE,
    }
}

override_section! {
    /// `[turntable]`: opening-screen rotation, fade and springs.
    TurntableOverrides {
        max_angle: f32 = turntable::MAX_ANGLE,
        rotation_end_progress: f32 = turntable::ROTATION_END_PROGRESS,
        completion_angle: f32 = turntable::COMPLETION_ANGLE,
        fade_start_progress: f32 = turntable::FADE_START_PROGRESS,
        scroll_range_fraction: f32 = turntable::SCROLL_RANGE_FRACTION,
        indicator_epsilon: f32 = turntable::INDICATOR_EPSILON,
        center_deadzone: f32 = turntable::CENTER_DEADZONE,
        indicator_rest_angle: f32 = turntable::INDICATOR_REST_ANGLE,
        indicator_engaged_angle: f32 = turntable::INDICATOR_ENGAGED_ANGLE,
        scroll_stiffness: f32 = turntable::SCROLL_STIFFNESS,
        scroll_damping: f32 = turntable::SCROLL_DAMPING,
        scroll_mass: f32 = turntable::SCROLL_MASS,
        drag_stiffness: f32 = turntable::DRAG_STIFFNESS,
        drag_damping: f32 = turntable::DRAG_DAMPING,
        drag_mass: f32 = turntable::DRAG_MASS,
    }
}

/// All override sections. Missing tables and fields keep their defaults;
/// unknown keys are rejected so typos do not pass silently.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeOverrides {
    pub layout: LayoutOverrides,
    pub input: InputOverrides,
    pub stack: StackOverrides,
    pub turntable: TurntableOverrides,
}

impl RuntimeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any field anywhere is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Resolve every field against the compiled defaults.
    pub fn to_tuning(&self) -> Tuning {
        Tuning {
            layout: self.layout_config(),
            input: self.input_config(),
            stack: self.stack_config(),
            turntable: self.turntable_config(),
        }
    }

    fn layout_config(&self) -> LayoutConfig {
        let l = &self.layout;
        LayoutConfig {
            mobile_max_width: l.mobile_max_width(),
            tablet_max_width: l.tablet_max_width(),
            landscape_max_width: l.landscape_max_width(),
            landscape_max_height: l.landscape_max_height(),
            header_band_mobile: l.header_band_mobile(),
            header_band: l.header_band(),
            footer_band_mobile: l.footer_band_mobile(),
            footer_band: l.footer_band(),
            mobile: CardBudget {
                width_fraction: l.mobile_width_fraction(),
                min: l.mobile_min_card(),
                max: l.mobile_max_card(),
            },
            tablet: CardBudget {
                width_fraction: l.tablet_width_fraction(),
                min: l.tablet_min_card(),
                max: l.tablet_max_card(),
            },
            desktop: CardBudget {
                width_fraction: l.desktop_width_fraction(),
                min: l.desktop_min_card(),
                max: l.desktop_max_card(),
            },
            landscape: CardBudget {
                width_fraction: l.landscape_height_fraction(),
                min: l.short_card_floor(),
                max: l.landscape_max_card(),
            },
            stage_height_fraction: l.stage_height_fraction(),
            short_viewport_height: l.short_viewport_height(),
            card_floor: l.card_floor(),
            short_card_floor: l.short_card_floor(),
            mobile_spacing: l.mobile_spacing(),
            landscape_mobile_spacing: l.landscape_mobile_spacing(),
            tablet_spacing_ratio: l.tablet_spacing_ratio(),
            desktop_spacing_ratio: l.desktop_spacing_ratio(),
        }
    }

    fn input_config(&self) -> InputConfig {
        let i = &self.input;
        InputConfig {
            wheel_min_delta: i.wheel_min_delta(),
            wheel_cooldown_ms: i.wheel_cooldown_ms(),
            swipe_threshold: i.swipe_threshold(),
            drag_threshold: i.drag_threshold(),
            drag_deadzone: i.drag_deadzone(),
            elastic_limit_factor: i.elastic_limit_factor(),
        }
    }

    fn stack_config(&self) -> StackConfig {
        let s = &self.stack;
        StackConfig {
            mobile_render_radius: s.mobile_render_radius(),
            render_radius: s.render_radius(),
            mobile_depth_step: s.mobile_depth_step(),
            depth_step: s.depth_step(),
            mobile_rotation_step: s.mobile_rotation_step(),
            rotation_step: s.rotation_step(),
            active_scale: s.active_scale(),
            scale_step: s.scale_step(),
            min_scale: s.min_scale(),
            z_order_base: s.z_order_base(),
        }
    }

    fn turntable_config(&self) -> TurntableConfig {
        let t = &self.turntable;
        TurntableConfig {
            max_angle: t.max_angle(),
            rotation_end_progress: t.rotation_end_progress(),
            completion_angle: t.completion_angle(),
            fade_start_progress: t.fade_start_progress(),
            scroll_range_fraction: t.scroll_range_fraction(),
            indicator_epsilon: t.indicator_epsilon(),
            center_deadzone: t.center_deadzone(),
            indicator_rest_angle: t.indicator_rest_angle(),
            indicator_engaged_angle: t.indicator_engaged_angle(),
            scroll_spring: SpringParams::new(
                t.scroll_stiffness(),
                t.scroll_damping(),
                t.scroll_mass(),
            ),
            drag_spring: SpringParams::new(
                t.drag_stiffness(),
                t.drag_damping(),
                t.drag_mass(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_reproduce_compiled_defaults() {
        let overrides = RuntimeOverrides::new();
        assert!(overrides.is_empty());
        assert_eq!(overrides.to_tuning(), Tuning::default());
    }

    #[test]
    fn set_fields_win_and_the_rest_fall_back() {
        let mut overrides = RuntimeOverrides::new();
        overrides.input.wheel_cooldown_ms = Some(120);
        overrides.turntable.drag_mass = Some(0.5);

        let tuning = overrides.to_tuning();
        assert_eq!(tuning.input.wheel_cooldown_ms, 120);
        assert_eq!(tuning.input.swipe_threshold, input::SWIPE_THRESHOLD);
        assert_eq!(tuning.turntable.drag_spring.mass, 0.5);
        assert_eq!(
            tuning.turntable.drag_spring.stiffness,
            turntable::DRAG_STIFFNESS
        );
        assert_eq!(tuning.layout, LayoutConfig::default());
    }
}
