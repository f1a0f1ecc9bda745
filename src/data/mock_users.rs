use crate::domain::user::UserRecord;

/// Seed users, with plain-text passwords.
pub fn mock_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new("Иван", "Иванов", "user1@example.com", "user"),
        UserRecord::new("Валерия", "Осипова", "val.osipova@gmail.com", "1234"),
    ]
}
