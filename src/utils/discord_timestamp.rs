use time::OffsetDateTime;

/// Renders a `<t:…:f>` tag (short date/time) that Discord clients display
/// in the viewer's local timezone.
pub fn discord_timestamp(datetime: impl Into<OffsetDateTime>) -> String {
    let unix_timestamp = datetime.into().unix_timestamp();
    format!("<t:{unix_timestamp}:f>")
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn tag_carries_the_unix_timestamp() {
        assert_eq!(
            discord_timestamp(datetime!(2021-04-20 16:20 UTC)),
            "<t:1618935600:f>"
        );
    }
}
