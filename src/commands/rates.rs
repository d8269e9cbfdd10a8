use indoc::formatdoc;
use poise::CreateReply;

use crate::{
    commands::{
        arguments::PositiveDecimal, internal_err, user_err, ApplicationContext, CommandResult,
        Context,
    },
    models::RateSettings,
    utils::format_amount,
};

/// Manage the conversion rates.
#[poise::command(
    slash_command,
    guild_only,
    subcommands("set", "show"),
    required_permissions = "ADMINISTRATOR",
    default_member_permissions = "ADMINISTRATOR"
)]
pub async fn rates(_ctx: Context<'_>) -> CommandResult {
    Err(user_err("The `/rates` command only works through its subcommands"))
}

/// Overwrite both conversion rates.
#[poise::command(slash_command)]
pub async fn set(
    ctx: ApplicationContext<'_>,
    #[description = "INR per 1 USDT"] usdt_to_inr: PositiveDecimal,
    #[description = "USDT per 1 INR"] inr_to_usdt: PositiveDecimal,
) -> CommandResult {
    let rates = RateSettings {
        usdt_to_inr: usdt_to_inr.into(),
        inr_to_usdt: inr_to_usdt.into(),
    };

    if let Err(err) = ctx.data.rate_repository.set_rates(rates).await {
        return Err(internal_err(format!("Could not store the new rates: {err}")));
    }

    let message = formatdoc! {
        r#"
            **Rates updated**
            1 USDT = {usdt_to_inr} INR
            1 INR = {inr_to_usdt} USDT
        "#,
        usdt_to_inr = format_amount(rates.usdt_to_inr),
        inr_to_usdt = format_amount(rates.inr_to_usdt),
    };

    ctx.send(CreateReply::default().ephemeral(true).content(message))
        .await?;

    Ok(())
}

/// Show the current conversion rates.
#[poise::command(slash_command)]
pub async fn show(ctx: ApplicationContext<'_>) -> CommandResult {
    let rates = match ctx.data.rate_repository.get_rates().await {
        Ok(rates) => rates,
        Err(err) => {
            return Err(internal_err(format!(
                "Could not load the current rates: {err}"
            )))
        }
    };

    let message = formatdoc! {
        r#"
            **Current rates**
            1 USDT = {usdt_to_inr} INR
            1 INR = {inr_to_usdt} USDT
        "#,
        usdt_to_inr = format_amount(rates.usdt_to_inr),
        inr_to_usdt = format_amount(rates.inr_to_usdt),
    };

    ctx.send(CreateReply::default().ephemeral(true).content(message))
        .await?;

    Ok(())
}
