use poise::{
    serenity_prelude::{RoleId, UserId},
    CreateReply,
};
use rust_decimal::Decimal;
use tracing::warn;

use crate::{
    access,
    commands::{
        arguments::PositiveDecimal, internal_err, user_err, ApplicationContext, CommandError,
        CommandResult, Context,
    },
    exchange::{self, Direction},
    models::{NewTransaction, Transaction},
    utils::format_amount,
    BotState,
};

/// Convert between USDT and INR at the current rates.
#[poise::command(
    slash_command,
    guild_only,
    subcommands("usdt_to_inr", "inr_to_usdt")
)]
pub async fn convert(_ctx: Context<'_>) -> CommandResult {
    Err(user_err("The `/convert` command only works through its subcommands"))
}

/// Convert an amount of USDT into INR at the current rate.
#[poise::command(slash_command, rename = "usdt-to-inr")]
pub async fn usdt_to_inr(
    ctx: ApplicationContext<'_>,
    #[description = "Amount of USDT to convert"] amount: PositiveDecimal,
) -> CommandResult {
    run_conversion(ctx, Direction::UsdtToInr, amount.into()).await
}

/// Convert an amount of INR into USDT at the current rate.
#[poise::command(slash_command, rename = "inr-to-usdt")]
pub async fn inr_to_usdt(
    ctx: ApplicationContext<'_>,
    #[description = "Amount of INR to convert"] amount: PositiveDecimal,
) -> CommandResult {
    run_conversion(ctx, Direction::InrToUsdt, amount.into()).await
}

/// Shared flow of both conversion subcommands: authorize and commit the
/// ledger record, then respond. The audit post comes last and never fails
/// the command.
async fn run_conversion(
    ctx: ApplicationContext<'_>,
    direction: Direction,
    amount: Decimal,
) -> CommandResult {
    let member = ctx
        .interaction
        .member
        .as_ref()
        .ok_or(internal_err("Conversion commands should only run in a guild"))?;

    let recorded =
        authorize_and_record(ctx.data, &member.roles, ctx.author().id, direction, amount).await?;

    ctx.send(CreateReply::default().content(format!(
        "{} {} = {} {}",
        format_amount(recorded.input_amount),
        direction.input_currency(),
        format_amount(recorded.output_amount),
        direction.output_currency(),
    )))
    .await?;

    if let Err(err) = ctx
        .data
        .audit_log
        .post_conversion(&ctx.serenity_context().http, &recorded)
        .await
    {
        warn!(
            "Could not post transaction {:?} to the audit channel: {err}",
            recorded.id
        );
    }

    Ok(())
}

/// Gate, compute, persist. Denied or failed calls leave the ledger
/// untouched; a returned transaction is already committed.
async fn authorize_and_record(
    state: &BotState,
    member_roles: &[RoleId],
    staff: UserId,
    direction: Direction,
    amount: Decimal,
) -> Result<Transaction, CommandError> {
    if !access::can_convert(member_roles, state.exchanger_role) {
        return Err(user_err(
            "You are not allowed to use the conversion commands.",
        ));
    }

    let rates = match state.rate_repository.get_rates().await {
        Ok(rates) => rates,
        Err(err) => {
            return Err(internal_err(format!(
                "Could not load the current rates: {err}"
            )))
        }
    };

    let result = match exchange::convert(direction, amount, rates) {
        Some(result) => result,
        None => {
            return Err(user_err(
                "The amount is too large to convert at the current rate.",
            ))
        }
    };

    match state
        .transaction_repository
        .record(&NewTransaction {
            staff,
            direction,
            input_amount: amount,
            output_amount: result,
        })
        .await
    {
        Ok(recorded) => Ok(recorded),
        Err(err) => Err(internal_err(format!(
            "Could not record the conversion: {err}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::ChannelId;
    use test_log::test;

    use crate::{
        audit::AuditLog,
        repository::{testing::memory_pool, RateRepository, TransactionRepository},
    };

    use super::*;

    async fn bot_state() -> BotState {
        let pool = memory_pool().await;
        let rate_repository = RateRepository::new(pool.clone());

        rate_repository.ensure_initialized().await.unwrap();

        BotState {
            rate_repository,
            transaction_repository: TransactionRepository::new(pool),
            audit_log: AuditLog::new(ChannelId::new(1)),
            exchanger_role: RoleId::new(1111),
        }
    }

    #[test(tokio::test)]
    async fn a_denied_caller_leaves_no_ledger_record() {
        let state = bot_state().await;
        let staff = UserId::new(42);

        let outcome = authorize_and_record(
            &state,
            &[RoleId::new(5)],
            staff,
            Direction::UsdtToInr,
            Decimal::from(100),
        )
        .await;

        assert!(matches!(outcome, Err(CommandError::User { .. })));
        let stats = state.transaction_repository.stats_for(staff).await.unwrap();
        assert_eq!(stats.count, 0);
    }

    #[test(tokio::test)]
    async fn an_authorized_caller_gets_a_committed_record() {
        let state = bot_state().await;
        let staff = UserId::new(42);

        let recorded = authorize_and_record(
            &state,
            &[state.exchanger_role],
            staff,
            Direction::UsdtToInr,
            Decimal::from(100),
        )
        .await
        .unwrap();

        assert_eq!(recorded.input_amount, Decimal::from(100));
        assert_eq!(recorded.output_amount, Decimal::from(8000));
        let stats = state.transaction_repository.stats_for(staff).await.unwrap();
        assert_eq!(stats.count, 1);
    }

    #[test(tokio::test)]
    async fn an_overflowing_amount_is_rejected_before_recording() {
        let state = bot_state().await;
        let staff = UserId::new(42);

        let outcome = authorize_and_record(
            &state,
            &[state.exchanger_role],
            staff,
            Direction::UsdtToInr,
            Decimal::MAX,
        )
        .await;

        assert!(matches!(outcome, Err(CommandError::User { .. })));
        let stats = state.transaction_repository.stats_for(staff).await.unwrap();
        assert_eq!(stats.count, 0);
    }
}
