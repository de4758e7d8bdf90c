use anchor_lang::prelude::*;
use anchor_spl::{
    token_2022::Token2022,
    token_interface::{self, Mint, MintTo, TokenAccount},
};
use crate::{
    constants::*,
    errors::AcademyError,
    events::PracticeRecorded,
    state::{Config, LearnerProfile},
    utils,
};

#[derive(Accounts)]
pub struct RecordPractice<'info> {
    pub backend_signer: Signer<'info>,

    #[account(
        seeds = [SEED_CONFIG],
        bump = config.bump,
        has_one = backend_signer @ AcademyError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    pub learner: SystemAccount<'info>,

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

/// Practice challenges live off-chain; the backend attests a pass and the
/// profile records it like any other daily activity.
pub fn handler(ctx: Context<RecordPractice>, xp_amount: u32) -> Result<()> {
    let config = &ctx.accounts.config;

    require!(!config.paused, AcademyError::Paused);

    let now = Clock::get()?.unix_timestamp;
    let today = utils::day_index(now);

    let profile = &mut ctx.accounts.learner_profile;
    utils::check_and_update_daily_xp(profile, xp_amount, config.max_daily_xp, today)?;
    utils::update_streak(profile, today);
    profile.practice_count = profile
        .practice_count
        .checked_add(1)
        .ok_or(AcademyError::MathOverflow)?;
    utils::award_xp(profile, xp_amount)?;

    if xp_amount > 0 {
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
            xp_amount as u64,
        )?;
    }

    let profile = &ctx.accounts.learner_profile;
    emit!(PracticeRecorded {
        learner: ctx.accounts.learner.key(),
        practice_count: profile.practice_count,
        xp_earned: xp_amount,
        streak_current: profile.streak_current,
        timestamp: now,
    });

    Ok(())
}
