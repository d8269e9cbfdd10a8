use indoc::formatdoc;
use poise::serenity_prelude::{ChannelId, Http, Mentionable};

use crate::{
    models::Transaction,
    utils::{discord_timestamp, format_amount},
};

/// Posts one message to the configured audit channel per recorded
/// conversion. Sending is best-effort: the ledger row is already committed
/// when this runs, so a failure here must not fail the command.
#[derive(Clone, Copy, Debug)]
pub struct AuditLog {
    channel: ChannelId,
}

impl AuditLog {
    pub fn new(channel: ChannelId) -> AuditLog {
        AuditLog { channel }
    }

    pub async fn post_conversion(
        &self,
        http: &Http,
        transaction: &Transaction,
    ) -> Result<(), serenity::Error> {
        let message = formatdoc! {
            r#"
                **{direction} conversion**
                Staff: {staff}
                Amount: {amount} {input_currency}
                Result: {result} {output_currency}
                Recorded: {recorded_at}
            "#,
            direction = transaction.direction,
            staff = transaction.staff.mention(),
            amount = format_amount(transaction.input_amount),
            input_currency = transaction.direction.input_currency(),
            result = format_amount(transaction.output_amount),
            output_currency = transaction.direction.output_currency(),
            recorded_at = discord_timestamp(transaction.recorded_at),
        };

        self.channel.say(http, message).await?;

        Ok(())
    }
}
