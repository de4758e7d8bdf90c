use anchor_lang::prelude::*;
use crate::{constants::*, state::Config};

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct InitConfigArgs {
    /// Service key allowed to record lesson/practice completions.
    pub backend_signer: Pubkey,
    /// XP token mint; the config PDA must hold its mint authority.
    pub xp_mint: Pubkey,
    /// Max XP per learner per UTC day. 0 = uncapped.
    pub max_daily_xp: u32,
}

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = Config::SPACE,
        seeds = [SEED_CONFIG],
        bump
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitConfig>, args: InitConfigArgs) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    cfg.authority = ctx.accounts.authority.key();
    cfg.backend_signer = args.backend_signer;
    cfg.xp_mint = args.xp_mint;
    cfg.max_daily_xp = args.max_daily_xp;
    cfg.paused = false;
    cfg.bump = ctx.bumps.config;
    Ok(())
}
