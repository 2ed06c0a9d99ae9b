use crate::types::Role;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]");

pub fn format_message_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    format_clock(datetime)
}

fn format_clock(datetime: OffsetDateTime) -> Option<String> {
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

pub fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Bot => "bot",
    }
}

pub fn avatar_label(role: Role) -> (&'static str, &'static str) {
    match role {
        Role::User => ("U", "You"),
        Role::Bot => ("B", "Bot"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_timestamp_is_hours_and_minutes() {
        let formatted = format_clock(datetime!(2024-03-01 09:05 UTC)).unwrap();
        assert_eq!(formatted, "09:05");
        assert!(format_message_timestamp(datetime!(2024-03-01 21:40 UTC)).is_some());
    }

    #[test]
    fn test_role_presentation() {
        assert_eq!(role_class(Role::User), "user");
        assert_eq!(avatar_label(Role::Bot), ("B", "Bot"));
    }
}
