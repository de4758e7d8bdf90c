use anchor_lang::prelude::*;
use anchor_spl::{
    token_2022::Token2022,
    token_interface::{self, Mint, MintTo, TokenAccount},
};
use crate::{
    achievements::{self, AchievementContext, CATALOG},
    constants::*,
    errors::AcademyError,
    events::AchievementClaimed,
    state::{Config, LearnerProfile},
    utils,
};

#[derive(Accounts)]
pub struct ClaimAchievement<'info> {
    pub learner: Signer<'info>,

    #[account(seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SEED_LEARNER, learner.key().as_ref()],
        bump = learner_profile.bump
    )]
    pub learner_profile: Account<'info, LearnerProfile>,

    #[account(
        mut,
        constraint = xp_mint.key() == config.xp_mint @ AcademyError::InvalidXpMint,
    )]
    pub xp_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = xp_mint,
        associated_token::authority = learner,
        associated_token::token_program = token_program
    )]
    pub learner_token_account: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Program<'info, Token2022>,
}

pub fn handler(ctx: Context<ClaimAchievement>, achievement_index: u8) -> Result<()> {
    let config = &ctx.accounts.config;

    require!(!config.paused, AcademyError::Paused);

    let achievement = CATALOG
        .get(achievement_index as usize)
        .ok_or(AcademyError::UnknownAchievement)?;

    let profile = &mut ctx.accounts.learner_profile;

    if achievements::is_claimed(profile.claimed_achievements, achievement_index) {
        // Claims are terminal; a retry must not mint the reward again.
        msg!("Achievement {} already claimed", achievement.id);
        return Ok(());
    }

    // Eligibility is judged on a fresh snapshot of the profile stats.
    let snapshot = AchievementContext::from_profile(profile);
    require!(
        achievements::is_eligible(achievement.predicate, &snapshot),
        AcademyError::AchievementNotEligible
    );

    profile.claimed_achievements =
        achievements::set_claimed(profile.claimed_achievements, achievement_index);
    utils::award_xp(profile, achievement.xp_reward)?;

    if achievement.xp_reward > 0 {
        let seeds = &[SEED_CONFIG, &[config.bump]];
        let signer_seeds = &[&seeds[..]];

        token_interface::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.xp_mint.to_account_info(),
                    to: ctx.accounts.learner_token_account.to_account_info(),
                    authority: config.to_account_info(),
                },
                signer_seeds,
            ),
            achievement.xp_reward as u64,
        )?;
    }

    let now = Clock::get()?.unix_timestamp;

    emit!(AchievementClaimed {
        learner: ctx.accounts.learner.key(),
        achievement_id: achievement.id.to_string(),
        achievement_index,
        xp_reward: achievement.xp_reward,
        timestamp: now,
    });

    msg!(
        "Achievement {} claimed by {} (+{} XP)",
        achievement.id,
        ctx.accounts.learner.key(),
        achievement.xp_reward
    );

    Ok(())
}
