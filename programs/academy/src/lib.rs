use anchor_lang::prelude::*;

pub mod achievements;
pub mod bitmap;
pub mod constants;
pub mod errors;
pub mod events;
pub mod state;
pub mod utils;
pub mod instructions;

use instructions::*;

declare_id!("FvzYqed1bZuhGMLHrhMaPdHEV33oha6erCFNhXpUe2Wm");

#[program]
pub mod academy {
    use super::*;

    pub fn init_config(ctx: Context<InitConfig>, args: InitConfigArgs) -> Result<()> {
        init_config::handler(ctx, args)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, args: UpdateConfigArgs) -> Result<()> {
        update_config::handler(ctx, args)
    }

    pub fn create_course(
        ctx: Context<CreateCourse>,
        course_id: String,
        lesson_count: u16,
        track_id: u8,
        prerequisite: Option<Pubkey>,
    ) -> Result<()> {
        create_course::handler(ctx, course_id, lesson_count, track_id, prerequisite)
    }

    pub fn update_course(
        ctx: Context<UpdateCourse>,
        lesson_count: Option<u16>,
        is_active: Option<bool>,
    ) -> Result<()> {
        update_course::handler(ctx, lesson_count, is_active)
    }

    pub fn init_learner(ctx: Context<InitLearner>) -> Result<()> {
        init_learner::handler(ctx)
    }

    pub fn enroll(ctx: Context<Enroll>) -> Result<()> {
        enroll::handler(ctx)
    }

    pub fn unenroll(ctx: Context<Unenroll>) -> Result<()> {
        unenroll::handler(ctx)
    }

    pub fn complete_lesson(
        ctx: Context<CompleteLesson>,
        lesson_index: u16,
        xp_amount: u32,
    ) -> Result<()> {
        complete_lesson::handler(ctx, lesson_index, xp_amount)
    }

    pub fn record_practice(ctx: Context<RecordPractice>, xp_amount: u32) -> Result<()> {
        record_practice::handler(ctx, xp_amount)
    }

    pub fn record_referral(ctx: Context<RecordReferral>) -> Result<()> {
        record_referral::handler(ctx)
    }

    pub fn claim_achievement(ctx: Context<ClaimAchievement>, achievement_index: u8) -> Result<()> {
        claim_achievement::handler(ctx, achievement_index)
    }
}
