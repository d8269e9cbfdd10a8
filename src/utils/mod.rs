mod discord_timestamp;
mod formatting;

pub use discord_timestamp::discord_timestamp;
pub use formatting::format_amount;
