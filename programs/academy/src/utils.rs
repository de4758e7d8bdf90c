use anchor_lang::prelude::*;
use crate::constants::{LEVEL_XP_UNIT, SECONDS_PER_DAY};
use crate::errors::AcademyError;
use crate::state::LearnerProfile;

/// XP position within the current level, for profile displays.
pub struct XpProgress {
    pub level: u16,
    pub current: u64,
    pub needed: u64,
    pub percent: u8,
}

/// UTC day counter used by streak and daily-cap accounting. Pre-epoch clocks
/// clamp to day zero.
pub fn day_index(unix_ts: i64) -> u32 {
    (unix_ts / SECONDS_PER_DAY).max(0) as u32
}

/// Floor of sqrt(n). Newton iteration, so level boundaries stay exact where
/// f64 sqrt would drift for large inputs.
pub fn integer_sqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// XP required to reach `level`: level^2 * 100.
pub fn xp_for_level(level: u32) -> u64 {
    (level as u64) * (level as u64) * LEVEL_XP_UNIT
}

/// Largest L with L^2 * 100 <= xp.
pub fn level_for_xp(xp: u64) -> u16 {
    integer_sqrt(xp / LEVEL_XP_UNIT).min(u16::MAX as u64) as u16
}

pub fn xp_progress(xp: u64) -> XpProgress {
    let level = level_for_xp(xp);
    let floor = xp_for_level(level as u32);
    let ceiling = xp_for_level(level as u32 + 1);
    let current = xp.saturating_sub(floor);
    // Thresholds strictly increase, so `needed` is never zero.
    let needed = ceiling - floor;
    XpProgress {
        level,
        current,
        needed,
        percent: ((current.saturating_mul(100) / needed).min(100)) as u8,
    }
}

/// Completed-lesson share of the course, rounded to the nearest percent.
/// A course with no lessons reports zero rather than dividing by it.
pub fn percent_complete(completed: u32, lesson_count: u16) -> u8 {
    if lesson_count == 0 {
        return 0;
    }
    let completed = completed.min(lesson_count as u32) as u64;
    let total = lesson_count as u64;
    ((completed * 200 + total) / (total * 2)) as u8
}

/// Day-granularity streak transition. Same day: no change. Consecutive day:
/// streak grows by one. Any gap (or a clock that moved backwards): streak
/// restarts at one. `streak_longest` never decreases.
pub fn update_streak(profile: &mut LearnerProfile, today: u32) {
    if profile.streak_current > 0 && today == profile.last_active_day {
        return;
    }
    if profile.streak_current > 0 && today == profile.last_active_day.saturating_add(1) {
        profile.streak_current = profile.streak_current.saturating_add(1);
    } else {
        profile.streak_current = 1;
    }
    profile.last_active_day = today;
    profile.streak_longest = profile.streak_longest.max(profile.streak_current);
}

/// Accumulates `xp_amount` against the profile's per-day counter, resetting it
/// when `today` moves past the recorded day. A cap of zero disables the check.
pub fn check_and_update_daily_xp(
    profile: &mut LearnerProfile,
    xp_amount: u32,
    max_daily_xp: u32,
    today: u32,
) -> Result<()> {
    if today != profile.xp_day {
        profile.xp_day = today;
        profile.xp_today = 0;
    }
    let next = profile
        .xp_today
        .checked_add(xp_amount)
        .ok_or(AcademyError::MathOverflow)?;
    if max_daily_xp > 0 {
        require!(next <= max_daily_xp, AcademyError::DailyXpCapExceeded);
    }
    profile.xp_today = next;
    Ok(())
}

/// Adds XP to the lifetime total and refreshes the cached level.
pub fn award_xp(profile: &mut LearnerProfile, amount: u32) -> Result<()> {
    profile.xp_total = profile
        .xp_total
        .checked_add(amount as u64)
        .ok_or(AcademyError::MathOverflow)?;
    profile.level = level_for_xp(profile.xp_total);
    Ok(())
}
