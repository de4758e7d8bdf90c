use anchor_lang::prelude::*;
use crate::{constants::*, state::LearnerProfile};

#[derive(Accounts)]
pub struct InitLearner<'info> {
    #[account(mut)]
    pub learner: Signer<'info>,

    #[account(
        init,
        payer = learner,
        space = LearnerProfile::SPACE,
        seeds = [SEED_LEARNER, learner.key().as_ref()],
        bump
    )]
    pub learner_profile: Account<'info, LearnerProfile>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitLearner>) -> Result<()> {
    let profile = &mut ctx.accounts.learner_profile;
    profile.authority = ctx.accounts.learner.key();
    profile.xp_total = 0;
    profile.level = 0;
    profile.streak_current = 0;
    profile.streak_longest = 0;
    profile.last_active_day = 0;
    profile.xp_day = 0;
    profile.xp_today = 0;
    profile.lessons_completed = 0;
    profile.courses_completed = 0;
    profile.completed_tracks = 0;
    profile.practice_count = 0;
    profile.referral_count = 0;
    profile.has_speed_run = false;
    profile.claimed_achievements = 0;
    profile.bump = ctx.bumps.learner_profile;
    Ok(())
}
