use crate::constants::TRACK_ANCHOR;
use crate::state::LearnerProfile;

/// Declarative achievement criteria, evaluated against a context snapshot.
/// Adding a rule means adding a variant and a catalog row, nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AchievementPredicate {
    MinLessons(u32),
    MinCourses(u16),
    MinStreak(u16),
    MinPractice(u32),
    MinReferrals(u16),
    TrackCompleted(u8),
    SpeedRun,
}

pub struct Achievement {
    pub id: &'static str,
    pub xp_reward: u32,
    pub predicate: AchievementPredicate,
}

/// Fixed catalog. Positions index into `LearnerProfile.claimed_achievements`,
/// so entries are append-only and capped at 32.
pub const CATALOG: &[Achievement] = &[
    Achievement { id: "first-steps", xp_reward: 50, predicate: AchievementPredicate::MinLessons(1) },
    Achievement { id: "getting-started", xp_reward: 100, predicate: AchievementPredicate::MinLessons(5) },
    Achievement { id: "dedicated-learner", xp_reward: 250, predicate: AchievementPredicate::MinLessons(25) },
    Achievement { id: "knowledge-seeker", xp_reward: 1_000, predicate: AchievementPredicate::MinLessons(100) },
    Achievement { id: "course-completer", xp_reward: 200, predicate: AchievementPredicate::MinCourses(1) },
    Achievement { id: "triple-threat", xp_reward: 500, predicate: AchievementPredicate::MinCourses(3) },
    Achievement { id: "speed-runner", xp_reward: 300, predicate: AchievementPredicate::SpeedRun },
    Achievement { id: "week-warrior", xp_reward: 100, predicate: AchievementPredicate::MinStreak(7) },
    Achievement { id: "monthly-master", xp_reward: 500, predicate: AchievementPredicate::MinStreak(30) },
    Achievement { id: "consistency-king", xp_reward: 2_000, predicate: AchievementPredicate::MinStreak(100) },
    Achievement { id: "rust-rookie", xp_reward: 75, predicate: AchievementPredicate::MinPractice(1) },
    Achievement { id: "practice-makes-perfect", xp_reward: 250, predicate: AchievementPredicate::MinPractice(25) },
    Achievement { id: "anchor-expert", xp_reward: 500, predicate: AchievementPredicate::TrackCompleted(TRACK_ANCHOR) },
    Achievement { id: "recruiter", xp_reward: 250, predicate: AchievementPredicate::MinReferrals(3) },
    Achievement { id: "ambassador", xp_reward: 1_000, predicate: AchievementPredicate::MinReferrals(10) },
];

/// Read-only learner statistics snapshot. Built fresh from the profile on
/// every evaluation, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AchievementContext {
    pub lessons_completed: u32,
    pub courses_completed: u16,
    pub streak_longest: u16,
    pub practice_count: u32,
    pub referral_count: u16,
    pub completed_tracks: u32,
    pub has_speed_run: bool,
}

impl AchievementContext {
    pub fn from_profile(profile: &LearnerProfile) -> Self {
        Self {
            lessons_completed: profile.lessons_completed,
            courses_completed: profile.courses_completed,
            streak_longest: profile.streak_longest,
            practice_count: profile.practice_count,
            referral_count: profile.referral_count,
            completed_tracks: profile.completed_tracks,
            has_speed_run: profile.has_speed_run,
        }
    }
}

pub fn is_eligible(predicate: AchievementPredicate, ctx: &AchievementContext) -> bool {
    match predicate {
        AchievementPredicate::MinLessons(n) => ctx.lessons_completed >= n,
        AchievementPredicate::MinCourses(n) => ctx.courses_completed >= n,
        AchievementPredicate::MinStreak(n) => ctx.streak_longest >= n,
        AchievementPredicate::MinPractice(n) => ctx.practice_count >= n,
        AchievementPredicate::MinReferrals(n) => ctx.referral_count >= n,
        AchievementPredicate::TrackCompleted(track) => track_completed(ctx.completed_tracks, track),
        AchievementPredicate::SpeedRun => ctx.has_speed_run,
    }
}

pub fn is_claimed(claimed_flags: u32, index: u8) -> bool {
    (index as usize) < 32 && claimed_flags & (1u32 << index) != 0
}

/// Returns `claimed_flags` with the claim bit for `index` set. One-way: no
/// operation clears a claim bit.
pub fn set_claimed(claimed_flags: u32, index: u8) -> u32 {
    if (index as usize) >= 32 {
        return claimed_flags;
    }
    claimed_flags | (1u32 << index)
}

/// Returns `completed_tracks` with the bit for `track_id` set.
pub fn mark_track_completed(completed_tracks: u32, track_id: u8) -> u32 {
    if (track_id as usize) >= 32 {
        return completed_tracks;
    }
    completed_tracks | (1u32 << track_id)
}

pub fn track_completed(completed_tracks: u32, track_id: u8) -> bool {
    (track_id as usize) < 32 && completed_tracks & (1u32 << track_id) != 0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AchievementState {
    Locked,
    Eligible,
    Claimed,
}

/// Display state for one catalog entry. Claimed is terminal: once the claim
/// bit is set the context no longer matters, even if the stats it was judged
/// on could regress.
pub fn achievement_state(index: u8, claimed_flags: u32, ctx: &AchievementContext) -> AchievementState {
    if is_claimed(claimed_flags, index) {
        return AchievementState::Claimed;
    }
    match CATALOG.get(index as usize) {
        Some(achievement) if is_eligible(achievement.predicate, ctx) => AchievementState::Eligible,
        _ => AchievementState::Locked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_fits_the_claim_bitmask() {
        assert!(CATALOG.len() <= 32);
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in CATALOG.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn min_lessons_thresholds_are_inclusive() {
        let mut ctx = AchievementContext::default();
        assert!(!is_eligible(AchievementPredicate::MinLessons(5), &ctx));
        ctx.lessons_completed = 4;
        assert!(!is_eligible(AchievementPredicate::MinLessons(5), &ctx));
        ctx.lessons_completed = 5;
        assert!(is_eligible(AchievementPredicate::MinLessons(5), &ctx));
        ctx.lessons_completed = 6;
        assert!(is_eligible(AchievementPredicate::MinLessons(5), &ctx));
    }

    #[test]
    fn streak_eligibility_uses_the_longest_streak() {
        let mut profile = LearnerProfile::default();
        profile.streak_current = 2;
        profile.streak_longest = 30;
        let ctx = AchievementContext::from_profile(&profile);
        assert!(is_eligible(AchievementPredicate::MinStreak(30), &ctx));
        assert!(!is_eligible(AchievementPredicate::MinStreak(31), &ctx));
    }

    #[test]
    fn track_predicate_checks_the_track_bit() {
        let mut ctx = AchievementContext::default();
        assert!(!is_eligible(AchievementPredicate::TrackCompleted(TRACK_ANCHOR), &ctx));
        ctx.completed_tracks = mark_track_completed(0, TRACK_ANCHOR);
        assert!(is_eligible(AchievementPredicate::TrackCompleted(TRACK_ANCHOR), &ctx));
        assert!(!is_eligible(AchievementPredicate::TrackCompleted(3), &ctx));
    }

    #[test]
    fn speed_run_and_referral_predicates() {
        let mut ctx = AchievementContext::default();
        assert!(!is_eligible(AchievementPredicate::SpeedRun, &ctx));
        ctx.has_speed_run = true;
        assert!(is_eligible(AchievementPredicate::SpeedRun, &ctx));

        ctx.referral_count = 9;
        assert!(!is_eligible(AchievementPredicate::MinReferrals(10), &ctx));
        ctx.referral_count = 10;
        assert!(is_eligible(AchievementPredicate::MinReferrals(10), &ctx));
    }

    #[test]
    fn claim_bits_set_once_and_stay_set() {
        let flags = set_claimed(0, 6);
        assert!(is_claimed(flags, 6));
        assert!(!is_claimed(flags, 5));
        assert_eq!(set_claimed(flags, 6), flags);
    }

    #[test]
    fn out_of_range_claim_indices_are_inert() {
        assert_eq!(set_claimed(0, 32), 0);
        assert!(!is_claimed(u32::MAX, 32));
    }

    #[test]
    fn state_machine_locked_to_eligible_to_claimed() {
        let week_warrior = 7u8;
        let mut ctx = AchievementContext::default();
        assert_eq!(achievement_state(week_warrior, 0, &ctx), AchievementState::Locked);

        ctx.streak_longest = 7;
        assert_eq!(achievement_state(week_warrior, 0, &ctx), AchievementState::Eligible);

        let flags = set_claimed(0, week_warrior);
        assert_eq!(achievement_state(week_warrior, flags, &ctx), AchievementState::Claimed);

        // The streak regressing afterwards does not revoke the claim.
        ctx.streak_longest = 0;
        assert_eq!(achievement_state(week_warrior, flags, &ctx), AchievementState::Claimed);
    }

    #[test]
    fn unknown_catalog_indices_stay_locked() {
        let ctx = AchievementContext::default();
        assert_eq!(achievement_state(31, 0, &ctx), AchievementState::Locked);
    }
}
