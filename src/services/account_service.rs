use regex::Regex;

use crate::models::user::SessionUser;

struct MockAccount {
    id: i64,
    email: &'static str,
    password: &'static str,
    name: &'static str,
}

// Demo accounts only. There is no user database behind the login.
const MOCK_ACCOUNTS: [MockAccount; 2] = [
    MockAccount {
        id: 1,
        email: "test@example.com",
        password: "password123",
        name: "Test User",
    },
    MockAccount {
        id: 2,
        email: "admin@example.com",
        password: "admin123",
        name: "Admin User",
    },
];

pub fn authenticate(email: &str, password: &str) -> Option<SessionUser> {
    MOCK_ACCOUNTS
        .iter()
        .find(|account| account.email.eq_ignore_ascii_case(email) && account.password == password)
        .map(|account| SessionUser {
            id: account.id,
            email: account.email.to_string(),
            name: account.name.to_string(),
        })
}

pub fn is_valid_email(email: &str) -> bool {
    match Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    ) {
        Ok(re) => re.is_match(email),
        Err(_) => false,
    }
}
