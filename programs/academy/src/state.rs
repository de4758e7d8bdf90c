use anchor_lang::prelude::*;
use crate::bitmap::{self, LessonBitmap};
use crate::constants::{BITMAP_WORDS, MAX_COURSE_ID_LEN};
use crate::errors::AcademyError;
use crate::utils;

#[account]
pub struct Config {
    pub authority: Pubkey,
    pub backend_signer: Pubkey,
    pub xp_mint: Pubkey,
    /// Max XP a learner can earn per UTC day from lessons and practice.
    /// 0 = uncapped.
    pub max_daily_xp: u32,
    pub paused: bool,
    pub bump: u8,
}

impl Config {
    pub const SPACE: usize = 8
        + 32 + 32 + 32
        + 4
        + 1
        + 1;
}

#[account]
pub struct Course {
    pub course_id: String,
    pub authority: Pubkey,
    pub lesson_count: u16,
    pub track_id: u8,
    pub is_active: bool,
    /// Course whose completed enrollment gates enrolling here.
    pub prerequisite: Option<Pubkey>,
    pub total_enrollments: u32,
    pub total_completions: u32,
    pub bump: u8,
}

impl Course {
    pub const SPACE: usize = 8
        + 4 + MAX_COURSE_ID_LEN
        + 32
        + 2
        + 1
        + 1
        + 1 + 32
        + 4
        + 4
        + 1;
}

#[account]
#[derive(Default)]
pub struct LearnerProfile {
    pub authority: Pubkey,
    pub xp_total: u64,
    pub level: u16,
    pub streak_current: u16,
    pub streak_longest: u16,
    /// UTC day index of the last streak-counted activity.
    pub last_active_day: u32,
    /// Day the `xp_today` accumulator belongs to.
    pub xp_day: u32,
    pub xp_today: u32,
    pub lessons_completed: u32,
    pub courses_completed: u16,
    /// Bitmask over track ids with at least one completed course.
    pub completed_tracks: u32,
    pub practice_count: u32,
    pub referral_count: u16,
    pub has_speed_run: bool,
    /// Bitmask over achievement catalog indices. Claim bits never clear.
    pub claimed_achievements: u32,
    pub bump: u8,
}

impl LearnerProfile {
    pub const SPACE: usize = 8
        + 32
        + 8
        + 2 + 2 + 2
        + 4 + 4 + 4
        + 4
        + 2
        + 4
        + 4
        + 2
        + 1
        + 4
        + 1;
}

/// What a single `record_lesson` call changed.
#[derive(Debug)]
pub struct LessonOutcome {
    pub newly_completed: bool,
    pub course_completed: bool,
}

#[account]
#[derive(Default)]
pub struct Enrollment {
    pub course: Pubkey,
    pub learner: Pubkey,
    pub enrolled_at: i64,
    /// Set once, on the call that completes the last lesson. Never cleared.
    pub completed_at: Option<i64>,
    pub lesson_flags: LessonBitmap,
    pub bump: u8,
}

impl Enrollment {
    pub const SPACE: usize = 8
        + 32 + 32
        + 8
        + 1 + 8
        + 8 * BITMAP_WORDS
        + 1;

    pub fn is_lesson_completed(&self, lesson_index: u16) -> bool {
        bitmap::is_bit_set(self.lesson_flags, lesson_index)
    }

    pub fn lessons_completed(&self) -> u32 {
        bitmap::popcount(self.lesson_flags)
    }

    pub fn completed_lesson_indices(&self) -> Vec<u16> {
        bitmap::to_indices(self.lesson_flags)
    }

    pub fn percent_complete(&self, lesson_count: u16) -> u8 {
        utils::percent_complete(self.lessons_completed(), lesson_count)
    }

    pub fn is_course_complete(&self, lesson_count: u16) -> bool {
        lesson_count > 0 && self.lessons_completed() >= lesson_count as u32
    }

    /// Marks `lesson_index` complete. Indices at or past `lesson_count` are
    /// rejected: the bitmap itself would absorb anything under 256, and a
    /// phantom bit there would inflate the completion percentage. Re-marking
    /// an already-complete index reports `newly_completed: false` so callers
    /// can skip XP and events on retries.
    pub fn record_lesson(
        &mut self,
        lesson_index: u16,
        lesson_count: u16,
        now: i64,
    ) -> Result<LessonOutcome> {
        require!(lesson_index < lesson_count, AcademyError::LessonOutOfBounds);

        if self.is_lesson_completed(lesson_index) {
            return Ok(LessonOutcome {
                newly_completed: false,
                course_completed: false,
            });
        }

        self.lesson_flags = bitmap::set_bit(self.lesson_flags, lesson_index);

        let course_completed =
            self.completed_at.is_none() && self.is_course_complete(lesson_count);
        if course_completed {
            self.completed_at = Some(now);
        }

        Ok(LessonOutcome {
            newly_completed: true,
            course_completed,
        })
    }
}
