//! Runtime bundle of every tunable

use crate::input::InputConfig;
use crate::layout::LayoutConfig;
use crate::stack::StackConfig;
use crate::turntable::TurntableConfig;

/// All tunables in one value. `Default` is the compiled constants;
/// `groove-config` builds one from override files.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuning {
    pub layout: LayoutConfig,
    pub input: InputConfig,
    pub stack: StackConfig,
    pub turntable: TurntableConfig,
}
