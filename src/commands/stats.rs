use indoc::formatdoc;
use poise::CreateReply;

use crate::{
    commands::{internal_err, ApplicationContext, CommandResult},
    utils::format_amount,
};

/// Show how many conversions you have recorded and their totals.
#[poise::command(slash_command)]
pub async fn stats(ctx: ApplicationContext<'_>) -> CommandResult {
    let stats = match ctx
        .data
        .transaction_repository
        .stats_for(ctx.author().id)
        .await
    {
        Ok(stats) => stats,
        Err(err) => {
            return Err(internal_err(format!(
                "Could not load the transaction stats: {err}"
            )))
        }
    };

    let message = formatdoc! {
        r#"
            Transactions: {count}
            Total Input: {total_input}
            Total Output: {total_output}
        "#,
        count = stats.count,
        total_input = format_amount(stats.total_input),
        total_output = format_amount(stats.total_output),
    };

    ctx.send(CreateReply::default().ephemeral(true).content(message))
        .await?;

    Ok(())
}
