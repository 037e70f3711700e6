//! Bootstrap administrators from environment variables.
//!
//! Roles normally come from the `profiles` collection. Ids listed in
//! `AGRIPAY_ADMIN_USER_IDS` are treated as administrators even without a
//! profile, so the first administrator can assign everyone else's role.

/// Parses a comma-separated list of user ids, ignoring blanks.
#[must_use]
pub fn parse_user_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Gets the bootstrap administrator ids from `AGRIPAY_ADMIN_USER_IDS`.
///
/// Returns an empty list when the variable is not set.
#[must_use]
pub fn get_admin_user_ids() -> Vec<String> {
    std::env::var("AGRIPAY_ADMIN_USER_IDS")
        .map(|raw| parse_user_ids(&raw))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_ids() {
        assert_eq!(
            parse_user_ids(" 123, 456 ,,789 "),
            vec!["123".to_string(), "456".to_string(), "789".to_string()]
        );
    }

    #[test]
    fn test_parse_user_ids_empty() {
        assert!(parse_user_ids("").is_empty());
        assert!(parse_user_ids(" , ").is_empty());
    }
}
