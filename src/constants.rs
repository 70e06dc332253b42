//! Application constants and configuration

pub const APP_NAME: &str = "Pricing Dashboard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tag sent to a background worker to kick off its computation
pub const START_SIGNAL: &str = "startCalculation";

/// Shown by the dashboard widget until a result arrives
pub const PLACEHOLDER: &str = "Calculating...";

/// Label of the action control on every plan card
pub const SUBSCRIBE_LABEL: &str = "SUBSCRIBE";

/// Below this available width the plan cards stack vertically (tailwind `sm`)
pub const STACK_BREAKPOINT: f32 = 640.0;

/// Default upper bound for the dashboard's sum computation
pub const DEFAULT_CALCULATION_UPPER: u64 = 50_000_000;
