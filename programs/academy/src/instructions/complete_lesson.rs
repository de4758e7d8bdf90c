use anchor_lang::prelude::*;
use anchor_spl::{
    token_2022::Token2022,
    token_interface::{self, Mint, MintTo, TokenAccount},
};
use crate::{
    achievements,
    constants::*,
    errors::AcademyError,
    events::{CourseCompleted, LessonCompleted},
    state::{Config, Course, Enrollment, LearnerProfile},
    utils,
};

#[derive(Accounts)]
pub struct CompleteLesson<'info> {
    /// Completion attestations come from the grading backend, not the wallet.
    pub backend_signer: Signer<'info>,

    #[account(
        seeds = [SEED_CONFIG],
        bump = config.bump,
        has_one = backend_signer @ AcademyError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    /// Learner wallet: profile/enrollment PDA key and XP recipient.
    pub learner: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [SEED_LEARNER, learner.key().as_ref()],
        bump = learner_profile.bump
    )]
    pub learner_profile: Account<'info, LearnerProfile>,

    #[account(
        mut,
        constraint = course.is_active @ AcademyError::CourseInactive,
    )]
    pub course: Account<'info, Course>,

    #[account(
        mut,
        seeds = [SEED_ENROLLMENT, course.key().as_ref(), learner.key().as_ref()],
        bump = enrollment.bump
    )]
    pub enrollment: Account<'info, Enrollment>,

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

pub fn handler(ctx: Context<CompleteLesson>, lesson_index: u16, xp_amount: u32) -> Result<()> {
    let config = &ctx.accounts.config;
    let learner_key = ctx.accounts.learner.key();

    require!(!config.paused, AcademyError::Paused);

    let now = Clock::get()?.unix_timestamp;
    let today = utils::day_index(now);

    let lesson_count = ctx.accounts.course.lesson_count;
    let enrollment = &mut ctx.accounts.enrollment;

    let outcome = enrollment.record_lesson(lesson_index, lesson_count, now)?;
    if !outcome.newly_completed {
        // Retried attestation. The lesson already counted; minting or
        // emitting again would double-pay it.
        msg!("Lesson {} already complete for learner {}", lesson_index, learner_key);
        return Ok(());
    }

    let profile = &mut ctx.accounts.learner_profile;
    utils::check_and_update_daily_xp(profile, xp_amount, config.max_daily_xp, today)?;
    utils::update_streak(profile, today);
    profile.lessons_completed = profile
        .lessons_completed
        .checked_add(1)
        .ok_or(AcademyError::MathOverflow)?;
    utils::award_xp(profile, xp_amount)?;

    let mut speed_run = false;
    if outcome.course_completed {
        let course = &mut ctx.accounts.course;
        course.total_completions = course
            .total_completions
            .checked_add(1)
            .ok_or(AcademyError::MathOverflow)?;

        profile.courses_completed = profile
            .courses_completed
            .checked_add(1)
            .ok_or(AcademyError::MathOverflow)?;
        profile.completed_tracks =
            achievements::mark_track_completed(profile.completed_tracks, course.track_id);

        speed_run = now.saturating_sub(enrollment.enrolled_at) <= SPEED_RUN_WINDOW_SECS;
        if speed_run {
            profile.has_speed_run = true;
        }
    }

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

    let enrollment = &ctx.accounts.enrollment;
    let course_key = ctx.accounts.course.key();

    emit!(LessonCompleted {
        learner: learner_key,
        course: course_key,
        lesson_index,
        lessons_completed: enrollment.lessons_completed(),
        percent_complete: enrollment.percent_complete(lesson_count),
        xp_earned: xp_amount,
        streak_current: ctx.accounts.learner_profile.streak_current,
        timestamp: now,
    });

    if outcome.course_completed {
        emit!(CourseCompleted {
            learner: learner_key,
            course: course_key,
            speed_run,
            timestamp: now,
        });
    }

    msg!(
        "Lesson {} complete for learner {} in course {} (+{} XP, streak {})",
        lesson_index,
        learner_key,
        ctx.accounts.course.course_id,
        xp_amount,
        ctx.accounts.learner_profile.streak_current
    );

    Ok(())
}
