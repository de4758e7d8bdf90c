pub const SEED_CONFIG: &[u8] = b"config";
pub const SEED_COURSE: &[u8] = b"course";
pub const SEED_LEARNER: &[u8] = b"learner";
pub const SEED_ENROLLMENT: &[u8] = b"enrollment";

/// Completion bitmap width. 4 x u64 = 256 lesson slots, matching the
/// `lesson_flags` field layout of the Enrollment account.
pub const BITMAP_WORDS: usize = 4;
pub const MAX_LESSONS: u16 = (BITMAP_WORDS as u16) * 64;

pub const MAX_COURSE_ID_LEN: usize = 64;

/// Track ids index into the `completed_tracks` bitmask on LearnerProfile.
pub const MAX_TRACKS: u8 = 32;
/// Track 1 is the Anchor framework track in the course catalog.
pub const TRACK_ANCHOR: u8 = 1;

/// XP threshold for level L is L * L * LEVEL_XP_UNIT.
pub const LEVEL_XP_UNIT: u64 = 100;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Completed courses cannot be unenrolled; incomplete ones only after this.
pub const UNENROLL_COOLDOWN_SECS: i64 = 86_400;

/// Finishing a course within this window of enrolling counts as a speed run.
pub const SPEED_RUN_WINDOW_SECS: i64 = 86_400;
