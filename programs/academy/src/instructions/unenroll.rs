use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::AcademyError,
    events::Unenrolled,
    state::{Course, Enrollment},
};

#[derive(Accounts)]
pub struct Unenroll<'info> {
    #[account(mut)]
    pub learner: Signer<'info>,

    pub course: Account<'info, Course>,

    #[account(
        mut,
        seeds = [SEED_ENROLLMENT, course.key().as_ref(), learner.key().as_ref()],
        bump = enrollment.bump,
        close = learner
    )]
    pub enrollment: Account<'info, Enrollment>,
}

pub fn handler(ctx: Context<Unenroll>) -> Result<()> {
    let enrollment = &ctx.accounts.enrollment;

    // Completed enrollments are the learner's permanent record.
    require!(
        enrollment.completed_at.is_none(),
        AcademyError::CourseAlreadyCompleted
    );

    let now = Clock::get()?.unix_timestamp;
    require!(
        now.saturating_sub(enrollment.enrolled_at) > UNENROLL_COOLDOWN_SECS,
        AcademyError::UnenrollCooldown
    );

    emit!(Unenrolled {
        learner: ctx.accounts.learner.key(),
        course: ctx.accounts.course.key(),
        timestamp: now,
    });

    msg!(
        "Learner {} unenrolled from course {}",
        ctx.accounts.learner.key(),
        ctx.accounts.course.course_id
    );

    Ok(())
}
