use anchor_lang::prelude::*;
use crate::{
    bitmap::EMPTY_BITMAP,
    constants::*,
    errors::AcademyError,
    events::Enrolled,
    state::{Config, Course, Enrollment, LearnerProfile},
};

#[derive(Accounts)]
pub struct Enroll<'info> {
    #[account(mut)]
    pub learner: Signer<'info>,

    #[account(seeds = [SEED_CONFIG], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        constraint = course.is_active @ AcademyError::CourseInactive,
    )]
    pub course: Account<'info, Course>,

    /// Created by `init_learner`; enrolling without a profile fails here.
    #[account(
        seeds = [SEED_LEARNER, learner.key().as_ref()],
        bump = learner_profile.bump
    )]
    pub learner_profile: Account<'info, LearnerProfile>,

    /// The learner's enrollment in the course's prerequisite, when set.
    pub prerequisite_enrollment: Option<Account<'info, Enrollment>>,

    /// One record per (course, learner): a second enroll attempt fails at
    /// `init` because this PDA already exists.
    #[account(
        init,
        payer = learner,
        space = Enrollment::SPACE,
        seeds = [SEED_ENROLLMENT, course.key().as_ref(), learner.key().as_ref()],
        bump
    )]
    pub enrollment: Account<'info, Enrollment>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Enroll>) -> Result<()> {
    require!(!ctx.accounts.config.paused, AcademyError::Paused);

    let now = Clock::get()?.unix_timestamp;
    let learner_key = ctx.accounts.learner.key();

    if let Some(prereq_course) = ctx.accounts.course.prerequisite {
        let prereq = ctx
            .accounts
            .prerequisite_enrollment
            .as_ref()
            .ok_or(AcademyError::PrerequisiteNotMet)?;
        require!(prereq.course == prereq_course, AcademyError::PrerequisiteNotMet);
        require!(prereq.learner == learner_key, AcademyError::PrerequisiteNotMet);
        require!(prereq.completed_at.is_some(), AcademyError::PrerequisiteNotMet);
    }

    let course_key = ctx.accounts.course.key();

    let enrollment = &mut ctx.accounts.enrollment;
    enrollment.course = course_key;
    enrollment.learner = learner_key;
    enrollment.enrolled_at = now;
    enrollment.completed_at = None;
    enrollment.lesson_flags = EMPTY_BITMAP;
    enrollment.bump = ctx.bumps.enrollment;

    let course = &mut ctx.accounts.course;
    course.total_enrollments = course
        .total_enrollments
        .checked_add(1)
        .ok_or(AcademyError::MathOverflow)?;

    emit!(Enrolled {
        learner: learner_key,
        course: course_key,
        timestamp: now,
    });

    msg!("Learner {} enrolled in course {}", learner_key, course.course_id);

    Ok(())
}
