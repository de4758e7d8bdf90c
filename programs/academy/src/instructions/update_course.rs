use anchor_lang::prelude::*;
use crate::{constants::*, errors::AcademyError, state::Course};

#[derive(Accounts)]
pub struct UpdateCourse<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        constraint = course.authority == authority.key() @ AcademyError::UnauthorizedAuthority,
    )]
    pub course: Account<'info, Course>,
}

pub fn handler(
    ctx: Context<UpdateCourse>,
    lesson_count: Option<u16>,
    is_active: Option<bool>,
) -> Result<()> {
    let course = &mut ctx.accounts.course;

    if let Some(v) = lesson_count {
        require!(v >= 1 && v <= MAX_LESSONS, AcademyError::InvalidLessonCount);
        course.lesson_count = v;
    }
    if let Some(v) = is_active {
        course.is_active = v;
    }

    Ok(())
}
