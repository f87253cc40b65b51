pub const AR0_MS: f64 = 1800.0;
pub const AR5_MS: f64 = 1200.0;
pub const AR10_MS: f64 = 450.0;

pub const OD0_MS: f64 = 80.0;
pub const OD10_MS: f64 = 20.0;

const AR_MS_STEP_LOW: f64 = (AR0_MS - AR5_MS) / 5.0;
const AR_MS_STEP_HIGH: f64 = (AR5_MS - AR10_MS) / 5.0;
const OD_MS_STEP: f64 = (OD0_MS - OD10_MS) / 10.0;

/// Approach preempt in milliseconds. Not clamped.
pub fn ar_to_ms(ar: f64) -> f64 {
    if ar <= 5.0 {
        AR0_MS - AR_MS_STEP_LOW * ar
    } else {
        AR5_MS - AR_MS_STEP_HIGH * (ar - 5.0)
    }
}

pub fn ms_to_ar(ms: f64) -> f64 {
    if ms > AR5_MS {
        (AR0_MS - ms) / AR_MS_STEP_LOW
    } else {
        5.0 + (AR5_MS - ms) / AR_MS_STEP_HIGH
    }
}

/// Great hit window in milliseconds. Not clamped.
pub fn od_to_ms(od: f64) -> f64 {
    OD0_MS - (OD_MS_STEP * od).ceil()
}

pub fn ms_to_od(ms: f64) -> f64 {
    (OD0_MS - ms) / OD_MS_STEP
}
