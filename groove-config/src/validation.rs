use thiserror::Error;

use groove_core::layout::CardBudget;
use groove_core::{
    InputConfig, LayoutConfig, SpringParams, StackConfig, Tuning,
    TurntableConfig,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigGuardRailError {
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{low_field} ({low}) must not exceed {high_field} ({high})")]
    InvertedRange {
        low_field: &'static str,
        low: f32,
        high_field: &'static str,
        high: f32,
    },
    #[error("{field} must lie within [0, 1] (got {value})")]
    ProgressOutOfRange { field: &'static str, value: f32 },
    #[error(
        "turntable.completion_angle ({completion}) must be below turntable.max_angle ({max})"
    )]
    CompletionUnreachable { completion: f32, max: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// Reject tunings the core cannot behave sensibly with and collect warnings
/// for ones that work but are probably mistakes.
pub fn apply_guard_rails(
    tuning: &Tuning,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    check_layout(&tuning.layout)?;
    check_input(&tuning.input, &mut warnings)?;
    check_stack(&tuning.stack)?;
    check_turntable(&tuning.turntable, &mut warnings)?;

    Ok(warnings)
}

fn check_layout(l: &LayoutConfig) -> Result<(), ConfigGuardRailError> {
    positive("layout.mobile_max_width", l.mobile_max_width)?;
    positive("layout.tablet_max_width", l.tablet_max_width)?;
    ordered(
        ("layout.mobile_max_width", l.mobile_max_width),
        ("layout.tablet_max_width", l.tablet_max_width),
    )?;
    positive("layout.landscape_max_width", l.landscape_max_width)?;
    positive("layout.landscape_max_height", l.landscape_max_height)?;

    non_negative("layout.header_band_mobile", l.header_band_mobile)?;
    non_negative("layout.header_band", l.header_band)?;
    non_negative("layout.footer_band_mobile", l.footer_band_mobile)?;
    non_negative("layout.footer_band", l.footer_band)?;

    budget(
        &l.mobile,
        [
            "layout.mobile_width_fraction",
            "layout.mobile_min_card",
            "layout.mobile_max_card",
        ],
    )?;
    budget(
        &l.tablet,
        [
            "layout.tablet_width_fraction",
            "layout.tablet_min_card",
            "layout.tablet_max_card",
        ],
    )?;
    budget(
        &l.desktop,
        [
            "layout.desktop_width_fraction",
            "layout.desktop_min_card",
            "layout.desktop_max_card",
        ],
    )?;
    positive("layout.landscape_height_fraction", l.landscape.width_fraction)?;
    positive("layout.landscape_max_card", l.landscape.max)?;

    progress("layout.stage_height_fraction", l.stage_height_fraction)?;
    positive("layout.stage_height_fraction", l.stage_height_fraction)?;
    non_negative("layout.short_viewport_height", l.short_viewport_height)?;
    positive("layout.short_card_floor", l.short_card_floor)?;
    positive("layout.card_floor", l.card_floor)?;
    ordered(
        ("layout.short_card_floor", l.short_card_floor),
        ("layout.card_floor", l.card_floor),
    )?;

    positive("layout.mobile_spacing", l.mobile_spacing)?;
    positive("layout.landscape_mobile_spacing", l.landscape_mobile_spacing)?;
    positive("layout.tablet_spacing_ratio", l.tablet_spacing_ratio)?;
    positive("layout.desktop_spacing_ratio", l.desktop_spacing_ratio)?;
    Ok(())
}

fn budget(
    b: &CardBudget,
    [fraction, min, max]: [&'static str; 3],
) -> Result<(), ConfigGuardRailError> {
    positive(fraction, b.width_fraction)?;
    positive(min, b.min)?;
    ordered((min, b.min), (max, b.max))
}

fn check_input(
    i: &InputConfig,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    non_negative("input.wheel_min_delta", i.wheel_min_delta)?;
    positive("input.swipe_threshold", i.swipe_threshold)?;
    positive("input.drag_threshold", i.drag_threshold)?;
    non_negative("input.drag_deadzone", i.drag_deadzone)?;
    positive("input.elastic_limit_factor", i.elastic_limit_factor)?;

    if i.wheel_cooldown_ms == 0 {
        warnings.push_with_hint(
            "input.wheel_cooldown_ms is 0; one trackpad burst will skip several albums",
            "A cooldown around 300ms keeps one swipe to one card",
        );
    }
    if i.drag_threshold < i.drag_deadzone {
        warnings.push_with_hint(
            format!(
                "input.drag_threshold ({}) is below input.drag_deadzone ({}); \
                 some committed drags will still count as clicks",
                i.drag_threshold, i.drag_deadzone
            ),
            "Keep the drag threshold at or above the click deadzone",
        );
    }
    Ok(())
}

fn check_stack(s: &StackConfig) -> Result<(), ConfigGuardRailError> {
    positive("stack.active_scale", s.active_scale)?;
    non_negative("stack.scale_step", s.scale_step)?;
    positive("stack.min_scale", s.min_scale)?;
    Ok(())
}

fn check_turntable(
    t: &TurntableConfig,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    positive("turntable.max_angle", t.max_angle)?;
    positive("turntable.completion_angle", t.completion_angle)?;
    if t.completion_angle >= t.max_angle {
        return Err(ConfigGuardRailError::CompletionUnreachable {
            completion: t.completion_angle,
            max: t.max_angle,
        });
    }

    progress("turntable.rotation_end_progress", t.rotation_end_progress)?;
    positive("turntable.rotation_end_progress", t.rotation_end_progress)?;
    progress("turntable.fade_start_progress", t.fade_start_progress)?;
    progress("turntable.indicator_epsilon", t.indicator_epsilon)?;
    positive("turntable.scroll_range_fraction", t.scroll_range_fraction)?;
    non_negative("turntable.center_deadzone", t.center_deadzone)?;

    spring(
        &t.scroll_spring,
        [
            "turntable.scroll_stiffness",
            "turntable.scroll_damping",
            "turntable.scroll_mass",
        ],
    )?;
    spring(
        &t.drag_spring,
        [
            "turntable.drag_stiffness",
            "turntable.drag_damping",
            "turntable.drag_mass",
        ],
    )?;

    if t.fade_start_progress < t.rotation_end_progress {
        warnings.push_with_hint(
            format!(
                "turntable.fade_start_progress ({}) is before turntable.rotation_end_progress ({}); \
                 the disc fades while still turning",
                t.fade_start_progress, t.rotation_end_progress
            ),
            "Start the fade at or after the end of the rotation window",
        );
    }
    Ok(())
}

fn spring(
    p: &SpringParams,
    [stiffness, damping, mass]: [&'static str; 3],
) -> Result<(), ConfigGuardRailError> {
    positive(stiffness, p.stiffness)?;
    positive(damping, p.damping)?;
    positive(mass, p.mass)
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigGuardRailError> {
    if value.is_nan() || value <= 0.0 || value.is_infinite() {
        return Err(ConfigGuardRailError::NotPositive { field, value });
    }
    Ok(())
}

fn non_negative(
    field: &'static str,
    value: f32,
) -> Result<(), ConfigGuardRailError> {
    if value.is_nan() || value < 0.0 || value.is_infinite() {
        return Err(ConfigGuardRailError::Negative { field, value });
    }
    Ok(())
}

fn progress(field: &'static str, value: f32) -> Result<(), ConfigGuardRailError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigGuardRailError::ProgressOutOfRange { field, value });
    }
    Ok(())
}

fn ordered(
    (low_field, low): (&'static str, f32),
    (high_field, high): (&'static str, f32),
) -> Result<(), ConfigGuardRailError> {
    if !low.is_finite() || !high.is_finite() || low > high {
        return Err(ConfigGuardRailError::InvertedRange {
            low_field,
            low,
            high_field,
            high,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_without_warnings() {
        let warnings = apply_guard_rails(&Tuning::default()).unwrap();
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn inverted_card_budget_is_rejected() {
        let mut tuning = Tuning::default();
        tuning.layout.tablet.min = 400.0;
        assert_eq!(
            apply_guard_rails(&tuning),
            Err(ConfigGuardRailError::InvertedRange {
                low_field: "layout.tablet_min_card",
                low: 400.0,
                high_field: "layout.tablet_max_card",
                high: 320.0,
            })
        );
    }

    #[test]
    fn zero_spring_mass_and_nan_are_rejected() {
        let mut tuning = Tuning::default();
        tuning.turntable.drag_spring.mass = 0.0;
        assert!(matches!(
            apply_guard_rails(&tuning),
            Err(ConfigGuardRailError::NotPositive {
                field: "turntable.drag_mass",
                ..
            })
        ));

        let mut tuning = Tuning::default();
        tuning.input.swipe_threshold = f32::NAN;
        assert!(matches!(
            apply_guard_rails(&tuning),
            Err(ConfigGuardRailError::NotPositive {
                field: "input.swipe_threshold",
                ..
            })
        ));
    }

    #[test]
    fn nan_breakpoint_and_card_floor_are_rejected() {
        let overrides = crate::RuntimeOverrides::parse_from_str(
            "[layout]\ntablet_max_width = nan\n",
            "t",
        )
        .unwrap();
        assert!(matches!(
            apply_guard_rails(&overrides.to_tuning()),
            Err(ConfigGuardRailError::NotPositive {
                field: "layout.tablet_max_width",
                ..
            })
        ));

        let mut tuning = Tuning::default();
        tuning.layout.card_floor = f32::NAN;
        assert!(matches!(
            apply_guard_rails(&tuning),
            Err(ConfigGuardRailError::NotPositive {
                field: "layout.card_floor",
                ..
            })
        ));
    }

    #[test]
    fn nan_budget_ceiling_is_rejected() {
        let mut tuning = Tuning::default();
        tuning.layout.desktop.max = f32::NAN;
        assert!(matches!(
            apply_guard_rails(&tuning),
            Err(ConfigGuardRailError::InvertedRange {
                high_field: "layout.desktop_max_card",
                ..
            })
        ));
    }

    #[test]
    fn completion_must_be_reachable() {
        let mut tuning = Tuning::default();
        tuning.turntable.completion_angle = 180.0;
        assert!(matches!(
            apply_guard_rails(&tuning),
            Err(ConfigGuardRailError::CompletionUnreachable { .. })
        ));
    }

    #[test]
    fn progress_windows_stay_in_unit_range() {
        let mut tuning = Tuning::default();
        tuning.turntable.fade_start_progress = 1.2;
        assert!(matches!(
            apply_guard_rails(&tuning),
            Err(ConfigGuardRailError::ProgressOutOfRange { .. })
        ));
    }

    #[test]
    fn suspicious_values_only_warn() {
        let mut tuning = Tuning::default();
        tuning.input.wheel_cooldown_ms = 0;
        tuning.input.drag_threshold = 5.0;
        tuning.turntable.fade_start_progress = 0.5;

        let warnings = apply_guard_rails(&tuning).unwrap();
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().all(|w| w.hint.is_some()));
        assert!(warnings.items[0].message.contains("wheel_cooldown_ms"));
    }
}
