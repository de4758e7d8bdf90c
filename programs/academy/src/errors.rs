use anchor_lang::prelude::*;

#[error_code]
pub enum AcademyError {
    #[msg("Program is paused")]
    Paused,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Unauthorized authority")]
    UnauthorizedAuthority,
    #[msg("Invalid course id")]
    InvalidCourseId,
    #[msg("Lesson count must be between 1 and 256")]
    InvalidLessonCount,
    #[msg("Track id exceeds the supported range")]
    InvalidTrack,
    #[msg("Course is not active")]
    CourseInactive,
    #[msg("Lesson index is outside the course's lesson count")]
    LessonOutOfBounds,
    #[msg("Prerequisite course has not been completed")]
    PrerequisiteNotMet,
    #[msg("Course already completed")]
    CourseAlreadyCompleted,
    #[msg("Unenroll cooldown has not elapsed")]
    UnenrollCooldown,
    #[msg("Daily XP cap exceeded")]
    DailyXpCapExceeded,
    #[msg("Mint does not match the configured XP mint")]
    InvalidXpMint,
    #[msg("Unknown achievement")]
    UnknownAchievement,
    #[msg("Achievement criteria not met")]
    AchievementNotEligible,
    #[msg("Math overflow")]
    MathOverflow,
}
