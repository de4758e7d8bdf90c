use anchor_lang::prelude::*;
use crate::{constants::*, errors::AcademyError, state::Config};

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct UpdateConfigArgs {
    pub authority: Option<Pubkey>,
    pub backend_signer: Option<Pubkey>,
    pub xp_mint: Option<Pubkey>,
    pub max_daily_xp: Option<u32>,
    pub paused: Option<bool>,
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_CONFIG],
        bump = config.bump,
        constraint = config.authority == authority.key() @ AcademyError::UnauthorizedAuthority,
    )]
    pub config: Account<'info, Config>,
}

pub fn handler(ctx: Context<UpdateConfig>, args: UpdateConfigArgs) -> Result<()> {
    let cfg = &mut ctx.accounts.config;

    if let Some(v) = args.authority {
        cfg.authority = v;
    }
    if let Some(v) = args.backend_signer {
        cfg.backend_signer = v;
    }
    if let Some(v) = args.xp_mint {
        cfg.xp_mint = v;
    }
    if let Some(v) = args.max_daily_xp {
        cfg.max_daily_xp = v;
    }
    if let Some(v) = args.paused {
        cfg.paused = v;
    }

    Ok(())
}
