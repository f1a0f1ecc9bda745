pub mod mock_users;
pub mod user_directory;
