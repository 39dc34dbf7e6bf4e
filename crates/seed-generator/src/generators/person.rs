//! Person-shaped value generators: names, emails, phone numbers.
//!
//! Names are drawn from fixed pools; emails and phone numbers are built
//! from patterns with random digit fills, so no two runs with different
//! seeds look alike but every value stays plausible.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Carlos", "Nancy", "Daniel", "Karen", "Ahmed", "Lisa", "Mateo", "Sofia", "Liam", "Emma",
    "Noah", "Olivia", "Ethan", "Ava",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young",
];

const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.test",
    "inbox.test",
];

/// Pick a first name from the pool.
pub fn first_name<R: Rng>(rng: &mut R) -> &'static str {
    FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())]
}

/// Pick a last name from the pool.
pub fn last_name<R: Rng>(rng: &mut R) -> &'static str {
    LAST_NAMES[rng.random_range(0..LAST_NAMES.len())]
}

/// Build an email address from a name plus a random numeric suffix.
///
/// The suffix keeps addresses distinct even when the name pools collide.
pub fn email<R: Rng>(rng: &mut R, first: &str, last: &str) -> String {
    let domain = EMAIL_DOMAINS[rng.random_range(0..EMAIL_DOMAINS.len())];
    let suffix: u16 = rng.random_range(1..1000);
    format!(
        "{}.{}{}@{}",
        first.to_lowercase(),
        last.to_lowercase(),
        suffix,
        domain
    )
}

/// Build a NANP-style phone number with random digit fills.
pub fn phone<R: Rng>(rng: &mut R) -> String {
    format!(
        "+1-{}-555-{}",
        random_digits(rng, 3),
        random_digits(rng, 4)
    )
}

/// Generate a string of exactly `digits` random digits, without a leading
/// zero.
fn random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(digits);
    result.push(char::from_digit(rng.random_range(1..10), 10).unwrap());
    for _ in 1..digits {
        result.push(char::from_digit(rng.random_range(0..10), 10).unwrap());
    }

    result
}
