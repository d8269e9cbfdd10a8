use poise::serenity_prelude::RoleId;

/// Whether the caller may invoke the conversion commands.
///
/// Pure capability check: any member holding the exchanger role passes,
/// regardless of other attributes. Admin commands are gated declaratively
/// through their `required_permissions` instead.
pub fn can_convert(roles: &[RoleId], exchanger_role: RoleId) -> bool {
    roles.contains(&exchanger_role)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchanger() -> RoleId {
        RoleId::new(1111)
    }

    #[test]
    fn member_with_the_exchanger_role_passes() {
        let roles = [RoleId::new(5), exchanger(), RoleId::new(7)];

        assert!(can_convert(&roles, exchanger()));
    }

    #[test]
    fn member_without_the_exchanger_role_is_denied() {
        let roles = [RoleId::new(5), RoleId::new(7)];

        assert!(!can_convert(&roles, exchanger()));
    }

    #[test]
    fn member_with_no_roles_is_denied() {
        assert!(!can_convert(&[], exchanger()));
    }
}
