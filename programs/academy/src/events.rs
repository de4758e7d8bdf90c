use anchor_lang::prelude::*;

#[event]
pub struct CourseCreated {
    pub course: Pubkey,
    pub course_id: String,
    pub lesson_count: u16,
    pub track_id: u8,
}

#[event]
pub struct Enrolled {
    pub learner: Pubkey,
    pub course: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct Unenrolled {
    pub learner: Pubkey,
    pub course: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct LessonCompleted {
    pub learner: Pubkey,
    pub course: Pubkey,
    pub lesson_index: u16,
    pub lessons_completed: u32,
    pub percent_complete: u8,
    pub xp_earned: u32,
    pub streak_current: u16,
    pub timestamp: i64,
}

#[event]
pub struct CourseCompleted {
    pub learner: Pubkey,
    pub course: Pubkey,
    pub speed_run: bool,
    pub timestamp: i64,
}

#[event]
pub struct PracticeRecorded {
    pub learner: Pubkey,
    pub practice_count: u32,
    pub xp_earned: u32,
    pub streak_current: u16,
    pub timestamp: i64,
}

#[event]
pub struct ReferralRecorded {
    pub referrer: Pubkey,
    pub referral_count: u16,
    pub timestamp: i64,
}

#[event]
pub struct AchievementClaimed {
    pub learner: Pubkey,
    pub achievement_id: String,
    pub achievement_index: u8,
    pub xp_reward: u32,
    pub timestamp: i64,
}
