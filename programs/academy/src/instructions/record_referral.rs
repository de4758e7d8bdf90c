use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::AcademyError,
    events::ReferralRecorded,
    state::{Config, LearnerProfile},
};

#[derive(Accounts)]
pub struct RecordReferral<'info> {
    pub backend_signer: Signer<'info>,

    #[account(
        seeds = [SEED_CONFIG],
        bump = config.bump,
        has_one = backend_signer @ AcademyError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    /// Wallet that referred a new learner.
    pub referrer: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [SEED_LEARNER, referrer.key().as_ref()],
        bump = referrer_profile.bump
    )]
    pub referrer_profile: Account<'info, LearnerProfile>,
}

pub fn handler(ctx: Context<RecordReferral>) -> Result<()> {
    require!(!ctx.accounts.config.paused, AcademyError::Paused);

    let profile = &mut ctx.accounts.referrer_profile;
    profile.referral_count = profile
        .referral_count
        .checked_add(1)
        .ok_or(AcademyError::MathOverflow)?;

    emit!(ReferralRecorded {
        referrer: ctx.accounts.referrer.key(),
        referral_count: profile.referral_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
