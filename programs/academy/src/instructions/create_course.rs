use anchor_lang::prelude::*;
use crate::{constants::*, errors::AcademyError, events::CourseCreated, state::{Config, Course}};

#[derive(Accounts)]
#[instruction(course_id: String)]
pub struct CreateCourse<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [SEED_CONFIG],
        bump = config.bump,
        constraint = config.authority == authority.key() @ AcademyError::UnauthorizedAuthority,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = authority,
        space = Course::SPACE,
        seeds = [SEED_COURSE, course_id.as_bytes()],
        bump
    )]
    pub course: Account<'info, Course>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateCourse>,
    course_id: String,
    lesson_count: u16,
    track_id: u8,
    prerequisite: Option<Pubkey>,
) -> Result<()> {
    require!(
        !course_id.is_empty() && course_id.len() <= MAX_COURSE_ID_LEN,
        AcademyError::InvalidCourseId
    );
    // The completion bitmap holds 256 slots; rejecting larger courses here is
    // what keeps out-of-range lesson indices structurally impossible later.
    require!(
        lesson_count >= 1 && lesson_count <= MAX_LESSONS,
        AcademyError::InvalidLessonCount
    );
    require!(track_id < MAX_TRACKS, AcademyError::InvalidTrack);

    let course = &mut ctx.accounts.course;
    course.course_id = course_id.clone();
    course.authority = ctx.accounts.authority.key();
    course.lesson_count = lesson_count;
    course.track_id = track_id;
    course.is_active = true;
    course.prerequisite = prerequisite;
    course.total_enrollments = 0;
    course.total_completions = 0;
    course.bump = ctx.bumps.course;

    emit!(CourseCreated {
        course: course.key(),
        course_id,
        lesson_count,
        track_id,
    });

    Ok(())
}
